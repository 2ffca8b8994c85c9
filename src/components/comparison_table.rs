//! Feature comparison table for blog articles, rendered from fetched JSON.
//!
//! The renderer is a pure string builder so the escaping and fallback rules
//! are testable off the DOM; the component fetches the data once and injects
//! the result. Any failure along the way leaves the container empty.

use std::collections::HashMap;

use gloo_net::http::Request;
use log::info;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

use crate::config;

const WRAPPER_STYLE: &str = "margin:32px 0;width:100%;overflow-x:auto;";
const TABLE_STYLE: &str = "width:100%;border-collapse:collapse;background:#0f2536;border-radius:14px;overflow:hidden;border:1px solid rgba(255,255,255,0.12);";
const CAPTION_STYLE: &str = "text-align:left;font-size:18px;font-weight:700;padding:16px 18px;background:rgba(255,255,255,0.04);color:#e6f1fa;border-bottom:1px solid rgba(255,255,255,0.12);";
const TH_STYLE: &str = "background:#1a2d42;color:#e6f1fa;font-weight:600;padding:14px 18px;border-bottom:1px solid rgba(255,255,255,0.12);font-size:15px;";
const CELL_STYLE: &str = "padding:12px 18px;border-bottom:1px solid rgba(255,255,255,0.12);color:#e6f1fa;font-size:15px;";
const CELL_LAST_STYLE: &str = "padding:12px 18px;border-bottom:none;color:#e6f1fa;font-size:15px;";
const CELL_CENTER: &str = "text-align:center;";

/// Shown in the competitor column when a feature has no override.
const NO_VALUE: &str = "–";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonData {
    /// Ordered (feature, LaunchMe value) pairs.
    pub features: Vec<(String, String)>,
    pub competitors: HashMap<String, Competitor>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Competitor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Builds the full table markup, or `None` when the competitor key is
/// unknown. All feature names and values are escaped.
pub fn render_table_html(data: &ComparisonData, competitor: &str) -> Option<String> {
    let comp = data.competitors.get(competitor)?;
    let comp_name = escape_html(comp.name.as_deref().unwrap_or(competitor));
    let last = data.features.len().saturating_sub(1);

    let mut html = format!(
        "<div class=\"blog-comparison-table-wrap\" style=\"{WRAPPER_STYLE}\">\
         <table class=\"blog-comparison-table\" aria-label=\"Features comparison LaunchMe vs {comp_name}\" style=\"{TABLE_STYLE}\">\
         <caption style=\"{CAPTION_STYLE}\">Features comparison LaunchMe vs {comp_name}</caption>\
         <thead><tr>\
         <th scope=\"col\" style=\"{TH_STYLE}text-align:left;\">Features</th>\
         <th scope=\"col\" style=\"{TH_STYLE}text-align:center;\">LaunchMe</th>\
         <th scope=\"col\" style=\"{TH_STYLE}text-align:center;\">{comp_name}</th>\
         </tr></thead><tbody>",
    );

    for (i, (feature, ours)) in data.features.iter().enumerate() {
        let theirs = comp
            .overrides
            .get(feature)
            .map(String::as_str)
            .unwrap_or(NO_VALUE);
        let row_style = if i == last { CELL_LAST_STYLE } else { CELL_STYLE };
        html.push_str(&format!(
            "<tr>\
             <td style=\"{row_style}\">{}</td>\
             <td style=\"{row_style}{CELL_CENTER}\">{}</td>\
             <td style=\"{row_style}{CELL_CENTER}\">{}</td>\
             </tr>",
            escape_html(feature),
            escape_html(ours),
            escape_html(theirs),
        ));
    }

    html.push_str("</tbody></table></div>");
    Some(html)
}

#[derive(Properties, PartialEq)]
pub struct ComparisonTableProps {
    pub competitor: AttrValue,
    /// Overrides the default data URL from [`config`].
    #[prop_or_default]
    pub source: Option<AttrValue>,
}

#[function_component(ComparisonTable)]
pub fn comparison_table(props: &ComparisonTableProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let competitor = props.competitor.to_string();
        let source = props
            .source
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| config::comparison_data_url().to_string());

        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let data = match Request::get(&source).send().await {
                        Ok(resp) => match resp.json::<ComparisonData>().await {
                            Ok(data) => data,
                            Err(_) => return,
                        },
                        Err(_) => return,
                    };
                    match render_table_html(&data, &competitor) {
                        Some(markup) => {
                            if let Some(el) = container_ref.cast::<Element>() {
                                el.set_inner_html(&markup);
                            }
                        }
                        None => info!("no comparison data for competitor {competitor}"),
                    }
                });
                || ()
            },
            (),
        );
    }

    html! { <div class="blog-comparison" ref={container_ref}></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> ComparisonData {
        serde_json::from_str(
            r#"{
                "features": [["SEO", "Yes"], ["Pricing", "$10"]],
                "competitors": {
                    "acme": { "name": "Acme", "overrides": { "SEO": "No" } }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn override_wins_and_missing_values_fall_back() {
        let html = render_table_html(&fixture(), "acme").unwrap();

        let seo = html.find("<td style=\"").unwrap();
        let seo_row = &html[seo..];
        assert!(seo_row.contains(">SEO</td>"));
        let after_seo = &seo_row[seo_row.find(">SEO</td>").unwrap()..];
        assert!(after_seo.contains(">Yes</td>"));
        assert!(after_seo[..after_seo.find("Pricing").unwrap()].contains(">No</td>"));

        let pricing = &html[html.find(">Pricing</td>").unwrap()..];
        assert!(pricing.contains(">$10</td>"));
        assert!(pricing.contains(&format!(">{NO_VALUE}</td>")));
    }

    #[test]
    fn unknown_competitor_renders_nothing() {
        assert_eq!(render_table_html(&fixture(), "globex"), None);
    }

    #[test]
    fn feature_names_and_values_are_escaped() {
        let data: ComparisonData = serde_json::from_str(
            r#"{
                "features": [["<b>x</b>", "a & b"]],
                "competitors": {
                    "acme": { "overrides": { "<b>x</b>": "\"quoted\"" } }
                }
            }"#,
        )
        .unwrap();
        let html = render_table_html(&data, "acme").unwrap();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(html.contains("&quot;quoted&quot;"));
    }

    #[test]
    fn competitor_key_is_used_when_name_is_absent() {
        let data: ComparisonData = serde_json::from_str(
            r#"{
                "features": [["SEO", "Yes"]],
                "competitors": { "acme": {} }
            }"#,
        )
        .unwrap();
        let html = render_table_html(&data, "acme").unwrap();
        assert!(html.contains("LaunchMe vs acme"));
    }
}
