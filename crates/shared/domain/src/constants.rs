//! Well-known names shared between the administration surfaces and their stores.

/// Surface (portlet) name of the global, control-panel workflow administration.
pub const CONTROL_PANEL_WORKFLOW: &str = "workflow_admin_control_panel";

/// Surface (portlet) name of the site-scoped workflow configuration.
pub const SITE_ADMINISTRATION_WORKFLOW: &str = "workflow_admin_site_administration";

/// Preference key holding the last chosen definition-link sort column.
pub const DEFINITION_LINK_ORDER_BY_COL: &str = "definition-link-order-by-col";

/// Preference key holding the last chosen definition-link sort direction.
pub const DEFINITION_LINK_ORDER_BY_TYPE: &str = "definition-link-order-by-type";

pub const DEFAULT_ORDER_BY_COL: &str = "resource";
pub const DEFAULT_ORDER_BY_TYPE: &str = "asc";

/// Language key of the "no workflow" placeholder label.
pub const NO_WORKFLOW_KEY: &str = "no-workflow";

/// Language key of the "version {0}" template.
pub const VERSION_X_KEY: &str = "version-x";

/// View path carried by the definition-link page URL.
pub const DEFINITION_LINK_VIEW_PATH: &str = "/definition_link/view.jsp";

/// Tab carried by the definition-link page URL.
pub const DEFINITION_LINK_TAB: &str = "default-configuration";
