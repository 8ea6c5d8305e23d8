use crate::error::{DefinitionLinkError, DefinitionLinkErrorExt};
use crate::search::{PARAM_DELTA, PARAM_KEYWORDS};
use url::Url;
use wadm_domain::constants::{DEFINITION_LINK_TAB, DEFINITION_LINK_VIEW_PATH};
use wadm_kernel::params::RequestParams;

pub const PARAM_MVC_PATH: &str = "mvcPath";
pub const PARAM_TABS: &str = "tabs1";

/// Builds the page-navigation URL of the definition-link list.
///
/// The base render URL keeps its own query; the view path and tab are appended, and
/// `delta` / `keywords` are carried forward when the request has them.
///
/// # Errors
/// Returns [`DefinitionLinkError::InvalidUrl`] when `render_url` does not parse.
pub fn portlet_url(render_url: &str, params: &RequestParams) -> Result<Url, DefinitionLinkError> {
    let mut url = Url::parse(render_url).context("Failed to parse render URL")?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair(PARAM_MVC_PATH, DEFINITION_LINK_VIEW_PATH);
        query.append_pair(PARAM_TABS, DEFINITION_LINK_TAB);

        for name in [PARAM_DELTA, PARAM_KEYWORDS] {
            if let Some(value) = params.get_non_null(name) {
                query.append_pair(name, &value);
            }
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_delta_and_keywords() {
        let params = RequestParams::from_query("delta=50&keywords=wiki+page&cur=2");
        let url = portlet_url("https://portal.test/group/guest/~/control_panel/workflow", &params)
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://portal.test/group/guest/~/control_panel/workflow?mvcPath=%2Fdefinition_link%2Fview.jsp&tabs1=default-configuration&delta=50&keywords=wiki+page"
        );
    }

    #[test]
    fn skips_null_parameters() {
        let params = RequestParams::from_query("delta=&keywords=null");
        let url = portlet_url("https://portal.test/web/site?p_p_id=workflow", &params).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], ("p_p_id".to_owned(), "workflow".to_owned()));
        assert!(pairs.iter().all(|(k, _)| k != "delta" && k != "keywords"));
    }

    #[test]
    fn invalid_base_is_an_error() {
        let err = portlet_url("not a url", &RequestParams::new()).unwrap_err();
        assert!(matches!(err, DefinitionLinkError::InvalidUrl { .. }));
    }
}
