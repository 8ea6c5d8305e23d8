use fxhash::FxHashMap;
use parking_lot::RwLock;
use tracing::trace;
use wadm_domain::{CompanyId, DefinitionLink, GroupId};
use wadm_kernel::{PortError, PortErrorExt};
use wadm_kernel::ports::DefinitionLinkService;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LinkKey {
    company_id: CompanyId,
    group_id: GroupId,
    class_name: String,
    class_pk: i64,
    type_pk: i64,
}

impl LinkKey {
    fn new(
        company_id: CompanyId,
        group_id: GroupId,
        class_name: &str,
        class_pk: i64,
        type_pk: i64,
    ) -> Self {
        Self { company_id, group_id, class_name: class_name.to_owned(), class_pk, type_pk }
    }

    fn of(link: &DefinitionLink) -> Self {
        Self::new(link.company_id, link.group_id, &link.class_name, link.class_pk, link.type_pk)
    }

    fn describe(&self) -> String {
        format!(
            "company {} group {} class {} ({}/{})",
            self.company_id, self.group_id, self.class_name, self.class_pk, self.type_pk
        )
    }
}

/// Definition link store keyed by (company, group, class name, class pk, type pk).
#[derive(Debug, Default)]
pub struct InMemoryLinkService {
    links: RwLock<FxHashMap<LinkKey, DefinitionLink>>,
}

impl InMemoryLinkService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a link, returning the one it replaced.
    pub fn insert(&self, link: DefinitionLink) -> Option<DefinitionLink> {
        self.links.write().insert(LinkKey::of(&link), link)
    }

    /// Deletes the link for the exact key, returning it if present.
    pub fn remove(
        &self,
        company_id: CompanyId,
        group_id: GroupId,
        class_name: &str,
    ) -> Option<DefinitionLink> {
        self.links.write().remove(&LinkKey::new(company_id, group_id, class_name, 0, 0))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.read().len()
    }

    fn find(&self, key: &LinkKey) -> Result<DefinitionLink, PortError> {
        self.links
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| PortError::no_such_link(key.describe()))
    }
}

impl DefinitionLinkService for InMemoryLinkService {
    fn default_link(
        &self,
        company_id: CompanyId,
        class_name: &str,
        class_pk: i64,
        type_pk: i64,
    ) -> Result<DefinitionLink, PortError> {
        self.find(&LinkKey::new(company_id, GroupId::DEFAULT, class_name, class_pk, type_pk))
    }

    fn link(
        &self,
        company_id: CompanyId,
        group_id: GroupId,
        class_name: &str,
        class_pk: i64,
        type_pk: i64,
        strict: bool,
    ) -> Result<DefinitionLink, PortError> {
        match self.find(&LinkKey::new(company_id, group_id, class_name, class_pk, type_pk)) {
            Err(err) if !strict && !group_id.is_default() => {
                trace!(%group_id, class_name, "Falling back to company default link");
                self.default_link(company_id, class_name, class_pk, type_pk).or_else(|_| {
                    Err::<DefinitionLink, _>(err).context("no company default to inherit")
                })
            },
            result => result,
        }
    }
}
