//! Endpoint index served at `/`.
//!
//! The page is rendered once from the OpenAPI document assembled by the router, so
//! every documented route shows up without a hand-maintained list.

use utoipa::openapi::{path::PathItem, OpenApi};

/// Path of the OpenAPI JSON document; listed on the sitemap as well.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Renders the HTML sitemap.
///
/// Parameterless GET routes become links; every other route is listed with its
/// methods only.
pub fn render(api: &OpenApi) -> String {
    let mut links = Vec::new();
    let mut others = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let methods = methods(item);
        if item.get.is_some() && !path.contains('{') {
            links.push(format!(
                "<li><a href=\"{path}\">{path}</a> <small>{}</small></li>",
                methods.join(", ")
            ));
        } else {
            others.push(format!("<li>{path} <small>{}</small></li>", methods.join(", ")));
        }
    }
    links.push(format!(
        "<li><a href=\"{OPENAPI_PATH}\">{OPENAPI_PATH}</a> <small>GET</small></li>"
    ));

    format!(
        "<!DOCTYPE html><html><head><title>{title}</title></head><body>\
         <h1>{title}</h1>\
         <p>API HOST: <code>/</code></p>\
         <h2>Endpoints</h2><ul>{links}</ul>\
         <h2>Other routes</h2><ul>{others}</ul>\
         </body></html>",
        title = api.info.title,
        links = links.join(""),
        others = others.join(""),
    )
}

fn methods(item: &PathItem) -> Vec<&'static str> {
    [
        ("GET", item.get.is_some()),
        ("POST", item.post.is_some()),
        ("PUT", item.put.is_some()),
        ("PATCH", item.patch.is_some()),
        ("DELETE", item.delete.is_some()),
    ]
    .into_iter()
    .filter_map(|(name, present)| present.then_some(name))
    .collect()
}
