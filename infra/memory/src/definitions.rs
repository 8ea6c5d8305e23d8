use parking_lot::RwLock;
use wadm_domain::{CompanyId, WorkflowDefinition};
use wadm_kernel::PortError;
use wadm_kernel::ports::{DefinitionOrder, WorkflowDefinitionManager};

/// Deployed workflow definitions of all companies.
#[derive(Debug, Default)]
pub struct InMemoryDefinitionManager {
    definitions: RwLock<Vec<WorkflowDefinition>>,
}

impl InMemoryDefinitionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys a definition version, replacing an identical (company, name, version).
    pub fn deploy(&self, definition: WorkflowDefinition) {
        let mut definitions = self.definitions.write();
        definitions.retain(|d| {
            d.company_id != definition.company_id
                || d.name != definition.name
                || d.version != definition.version
        });
        definitions.push(definition);
    }

    /// Marks every version of `name` active or inactive. Returns how many changed.
    pub fn set_active(&self, company_id: CompanyId, name: &str, active: bool) -> usize {
        let mut changed = 0;
        for definition in self.definitions.write().iter_mut() {
            if definition.company_id == company_id && definition.name == name {
                definition.active = active;
                changed += 1;
            }
        }
        changed
    }
}

impl WorkflowDefinitionManager for InMemoryDefinitionManager {
    fn active_definitions(
        &self,
        company_id: CompanyId,
        order: DefinitionOrder,
    ) -> Result<Vec<WorkflowDefinition>, PortError> {
        let mut active: Vec<WorkflowDefinition> = self
            .definitions
            .read()
            .iter()
            .filter(|d| d.company_id == company_id && d.active)
            .cloned()
            .collect();

        active.sort_by(|a, b| a.name.cmp(&b.name).then(a.version.cmp(&b.version)));
        if order == DefinitionOrder::NameDesc {
            active.reverse();
        }
        Ok(active)
    }
}
