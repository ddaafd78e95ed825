//! Rewrites spreadsheet share links into direct CSV export links.

use reqwest::Url;

/// Turns a Google Sheets view/edit link into its `export?format=csv` form,
/// keeping the sheet `gid` from the query or fragment.
///
/// Links already in export form, and anything that is not a Sheets
/// document link, are returned unchanged.
pub fn to_csv_export_url(link: &str) -> String {
    if link.contains("export?format=csv") {
        return link.to_string();
    }
    let Ok(url) = Url::parse(link) else {
        return link.to_string();
    };
    let Some(host) = url.host_str() else {
        return link.to_string();
    };
    if !host.ends_with("docs.google.com") {
        return link.to_string();
    }

    let segments: Vec<&str> = url.path_segments().map(|s| s.collect()).unwrap_or_default();
    let Some(id) = segments
        .windows(3)
        .find(|w| w[0] == "spreadsheets" && w[1] == "d")
        .map(|w| w[2])
    else {
        return link.to_string();
    };

    let mut export = format!(
        "{}://{}/spreadsheets/d/{}/export?format=csv",
        url.scheme(),
        host,
        id
    );
    if let Some(gid) = sheet_gid(&url) {
        export.push_str("&gid=");
        export.push_str(&gid);
    }
    export
}

fn sheet_gid(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "gid")
        .map(|(_, v)| v.into_owned())
        .or_else(|| {
            url.fragment()?
                .split('&')
                .find_map(|kv| kv.strip_prefix("gid="))
                .map(str::to_string)
        })
}
