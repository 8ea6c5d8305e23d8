use crate::error::{DefinitionLinkError, DefinitionLinkErrorExt};
use crate::search::{PARAM_ORDER_BY_COL, PARAM_ORDER_BY_TYPE, PARAM_SAVE_ORDER_BY};
use tracing::debug;
use wadm_domain::UserId;
use wadm_domain::constants::{
    CONTROL_PANEL_WORKFLOW, DEFAULT_ORDER_BY_COL, DEFAULT_ORDER_BY_TYPE,
    DEFINITION_LINK_ORDER_BY_COL, DEFINITION_LINK_ORDER_BY_TYPE,
};
use wadm_kernel::params::RequestParams;
use wadm_kernel::ports::PortalPreferences;

/// The two remembered ordering choices of the definition-link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPreference {
    Column,
    Direction,
}

impl OrderPreference {
    #[must_use]
    pub const fn param(self) -> &'static str {
        match self {
            Self::Column => PARAM_ORDER_BY_COL,
            Self::Direction => PARAM_ORDER_BY_TYPE,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Column => DEFINITION_LINK_ORDER_BY_COL,
            Self::Direction => DEFINITION_LINK_ORDER_BY_TYPE,
        }
    }

    #[must_use]
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Column => DEFAULT_ORDER_BY_COL,
            Self::Direction => DEFAULT_ORDER_BY_TYPE,
        }
    }

    /// Resolves the value for this request.
    ///
    /// A request value wins and is remembered when `saveOrderBy` is set. Without one,
    /// the remembered value or the built-in default applies. Preferences always live
    /// under the control-panel namespace, whichever surface renders the list.
    ///
    /// # Errors
    /// Returns [`DefinitionLinkError::Upstream`] when the preference store fails.
    pub fn resolve(
        self,
        params: &RequestParams,
        preferences: &dyn PortalPreferences,
        user_id: UserId,
    ) -> Result<String, DefinitionLinkError> {
        if let Some(requested) = params.get_non_null(self.param()) {
            if params.get_bool(PARAM_SAVE_ORDER_BY, false) {
                debug!(key = self.key(), value = %requested, "Saving definition link order");
                preferences
                    .set_value(user_id, CONTROL_PANEL_WORKFLOW, self.key(), &requested)
                    .context("Failed to save definition link order")?;
            }
            return Ok(requested);
        }

        let stored = preferences
            .value(user_id, CONTROL_PANEL_WORKFLOW, self.key())
            .context("Failed to read definition link order")?;

        Ok(stored.unwrap_or_else(|| self.default_value().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wadm_kernel::PortError;
    use wadm_kernel::ports::MockPortalPreferences;

    const USER: UserId = UserId(7);

    #[test]
    fn falls_back_to_default_without_preference() {
        let mut prefs = MockPortalPreferences::new();
        prefs
            .expect_value()
            .withf(|user, namespace, key| {
                *user == USER
                    && namespace == CONTROL_PANEL_WORKFLOW
                    && key == DEFINITION_LINK_ORDER_BY_COL
            })
            .times(1)
            .returning(|_, _, _| Ok(None));
        prefs.expect_set_value().never();

        let col = OrderPreference::Column.resolve(&RequestParams::new(), &prefs, USER).unwrap();
        assert_eq!(col, "resource");
    }

    #[test]
    fn uses_stored_preference() {
        let mut prefs = MockPortalPreferences::new();
        prefs.expect_value().returning(|_, _, _| Ok(Some("desc".to_owned())));

        let params = RequestParams::from_query("orderByType=null");
        let dir = OrderPreference::Direction.resolve(&params, &prefs, USER).unwrap();
        assert_eq!(dir, "desc");
    }

    #[test]
    fn request_value_is_saved_only_when_asked() {
        let mut prefs = MockPortalPreferences::new();
        prefs.expect_value().never();
        prefs.expect_set_value().never();

        let params = RequestParams::from_query("orderByCol=workflow");
        let col = OrderPreference::Column.resolve(&params, &prefs, USER).unwrap();
        assert_eq!(col, "workflow");

        let mut prefs = MockPortalPreferences::new();
        prefs
            .expect_set_value()
            .withf(|user, namespace, key, value| {
                *user == USER
                    && namespace == CONTROL_PANEL_WORKFLOW
                    && key == DEFINITION_LINK_ORDER_BY_COL
                    && value == "workflow"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let params = RequestParams::from_query("orderByCol=workflow&saveOrderBy=true");
        let col = OrderPreference::Column.resolve(&params, &prefs, USER).unwrap();
        assert_eq!(col, "workflow");
    }

    #[test]
    fn store_failures_propagate() {
        let mut prefs = MockPortalPreferences::new();
        prefs.expect_value().returning(|_, _, _| Err(PortError::unavailable("store offline")));

        let err =
            OrderPreference::Column.resolve(&RequestParams::new(), &prefs, USER).unwrap_err();
        assert!(err.port_error().is_some());
    }
}
