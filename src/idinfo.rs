use crate::error::Error;
use scraper::{Html, Selector};

/// Pull the identification blurb out of a species reference page: the
/// `content` attribute of its `og:description` meta tag, trimmed. A page
/// without the tag or attribute is a scrape failure, never an empty string.
pub(crate) fn extract_id_info(html: &str) -> Result<String, Error> {
    let document = Html::parse_document(html);

    let selector = Selector::parse(r#"meta[property="og:description"]"#)
        .map_err(|e| Error::Scrape(format!("invalid meta selector: {e}")))?;

    let tag = document
        .select(&selector)
        .next()
        .ok_or_else(|| Error::Scrape("species page has no og:description meta tag".to_string()))?;

    let content = tag
        .value()
        .attr("content")
        .ok_or_else(|| Error::Scrape("og:description tag has no content attribute".to_string()))?;

    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_trims_description() {
        let html = r#"<html><head>
            <meta property="og:title" content="American Woodcock"/>
            <meta property="og:description" content="  Plump, well-camouflaged shorebird that favors wooded or shrubby areas.  "/>
        </head><body></body></html>"#;
        assert_eq!(
            extract_id_info(html).unwrap(),
            "Plump, well-camouflaged shorebird that favors wooded or shrubby areas."
        );
    }

    #[test]
    fn test_missing_tag_is_scrape_error() {
        let err = extract_id_info("<html><head></head><body></body></html>").unwrap_err();
        assert!(matches!(err, Error::Scrape(_)));
    }

    #[test]
    fn test_missing_content_attribute_is_scrape_error() {
        let html = r#"<html><head><meta property="og:description"/></head></html>"#;
        let err = extract_id_info(html).unwrap_err();
        assert!(matches!(err, Error::Scrape(_)));
        assert!(err.to_string().contains("content attribute"));
    }
}
