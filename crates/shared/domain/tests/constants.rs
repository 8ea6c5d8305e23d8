use wadm_domain::constants::{
    CONTROL_PANEL_WORKFLOW, DEFAULT_ORDER_BY_COL, DEFAULT_ORDER_BY_TYPE,
    DEFINITION_LINK_ORDER_BY_COL, DEFINITION_LINK_ORDER_BY_TYPE, SITE_ADMINISTRATION_WORKFLOW,
};

#[test]
fn preference_keys_match_stored_names() {
    assert_eq!(DEFINITION_LINK_ORDER_BY_COL, "definition-link-order-by-col");
    assert_eq!(DEFINITION_LINK_ORDER_BY_TYPE, "definition-link-order-by-type");
}

#[test]
fn order_defaults() {
    assert_eq!(DEFAULT_ORDER_BY_COL, "resource");
    assert_eq!(DEFAULT_ORDER_BY_TYPE, "asc");
}

#[test]
fn surfaces_are_distinct() {
    assert_ne!(CONTROL_PANEL_WORKFLOW, SITE_ADMINISTRATION_WORKFLOW);
}
