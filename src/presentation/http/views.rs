//! Server-rendered HTML pages for the bank → state → city → branch tree.

use crate::application::dto::{
    BankDirectoryDto, BranchDto, CityDirectoryDto, DirectoryLink, StateDirectoryDto,
};
use axum::http::StatusCode;

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 960px; padding: 0 1rem; color: #1f2933; }
header { border-bottom: 1px solid #d9e2ec; padding: 1rem 0; }
header a { color: inherit; text-decoration: none; font-weight: 600; }
nav.crumbs { font-size: 0.9rem; margin: 1rem 0; }
nav.crumbs a { color: #2f6fde; }
ul.links { columns: 3 14rem; padding-left: 1rem; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.4rem 0.6rem; border-bottom: 1px solid #e4e7eb; vertical-align: top; }
th { width: 30%; color: #52606d; font-weight: 500; }
footer { margin: 2rem 0; font-size: 0.8rem; color: #7b8794; }
"#;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, description: &str, canonical: Option<&str>, body: &str) -> String {
    let canonical = canonical
        .map(|url| format!(r#"<link rel="canonical" href="{}">"#, html_escape(url)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="description" content="{description}">
    {canonical}
    <style>
{css}
    </style>
</head>
<body>
    <header><a href="/">IFSC Lookup</a></header>
    <main>
{body}
    </main>
    <footer>Branch data is provided as-is. Verify with your bank before making a transfer.</footer>
</body>
</html>"#,
        title = html_escape(title),
        description = html_escape(description),
        css = CSS,
    )
}

fn crumbs(links: &[&DirectoryLink]) -> String {
    let mut html = String::from(r#"<nav class="crumbs"><a href="/banks">All banks</a>"#);
    for link in links {
        html.push_str(&format!(
            r#" › <a href="{}">{}</a>"#,
            html_escape(&link.path),
            html_escape(&link.name)
        ));
    }
    html.push_str("</nav>");
    html
}

fn link_list(links: &[DirectoryLink]) -> String {
    if links.is_empty() {
        return "<p>Nothing listed yet.</p>".to_string();
    }
    let mut html = String::from(r#"<ul class="links">"#);
    for link in links {
        html.push_str(&format!(
            r#"<li><a href="{}">{}</a></li>"#,
            html_escape(&link.path),
            html_escape(&link.name)
        ));
    }
    html.push_str("</ul>");
    html
}

pub fn home_page(base_url: &str) -> String {
    let body = r#"<h1>Find any bank branch by IFSC code</h1>
<p>Look up the branch, address, MICR code and supported payment services behind any
Indian Financial System Code, or browse branches by bank, state and city.</p>
<p><a href="/banks">Browse all banks</a></p>"#;
    layout(
        "IFSC Code Lookup for Indian Bank Branches",
        "Search IFSC codes and browse bank branches across India by bank, state and city.",
        Some(&format!("{base_url}/")),
        body,
    )
}

pub fn banks_page(base_url: &str, banks: &[DirectoryLink]) -> String {
    let body = format!(
        "<h1>Banks</h1>\n<p>{} banks with branch IFSC codes.</p>\n{}",
        banks.len(),
        link_list(banks)
    );
    layout(
        "All Banks: IFSC Codes by Bank",
        "Browse IFSC codes for every bank in India.",
        Some(&format!("{base_url}/banks")),
        &body,
    )
}

pub fn bank_page(base_url: &str, page: &BankDirectoryDto) -> String {
    let bank = html_escape(&page.bank.name);
    let body = format!(
        "{}\n<h1>{bank} IFSC codes by state</h1>\n{}",
        crumbs(&[&page.bank]),
        link_list(&page.states)
    );
    layout(
        &format!("{} IFSC Codes by State", page.bank.name),
        &format!("Find {} branch IFSC codes in every state.", page.bank.name),
        Some(&format!("{base_url}{}", page.bank.path)),
        &body,
    )
}

pub fn state_page(base_url: &str, page: &StateDirectoryDto) -> String {
    let body = format!(
        "{}\n<h1>{} branches in {}</h1>\n{}",
        crumbs(&[&page.bank, &page.state]),
        html_escape(&page.bank.name),
        html_escape(&page.state.name),
        link_list(&page.cities)
    );
    layout(
        &format!("{} IFSC Codes in {}", page.bank.name, page.state.name),
        &format!(
            "Cities in {} with {} branches and their IFSC codes.",
            page.state.name, page.bank.name
        ),
        Some(&format!("{base_url}{}", page.state.path)),
        &body,
    )
}

pub fn city_page(base_url: &str, page: &CityDirectoryDto) -> String {
    let mut rows = String::new();
    for branch in &page.branches {
        let path = format!("/ifsc/{}", branch.ifsc);
        rows.push_str(&format!(
            r#"<tr><td><a href="{}">{}</a></td><td>{}</td><td>{}</td></tr>"#,
            html_escape(&path),
            html_escape(&branch.ifsc),
            html_escape(branch.branch.as_deref().unwrap_or("")),
            html_escape(branch.address.as_deref().unwrap_or(""))
        ));
    }

    let body = format!(
        r#"{}
<h1>{} branches in {}, {}</h1>
<table>
<thead><tr><th>IFSC</th><th>Branch</th><th>Address</th></tr></thead>
<tbody>{rows}</tbody>
</table>"#,
        crumbs(&[&page.bank, &page.state, &page.city]),
        html_escape(&page.bank.name),
        html_escape(&page.city.name),
        html_escape(&page.state.name),
    );
    layout(
        &format!(
            "{} IFSC Codes in {}, {}",
            page.bank.name, page.city.name, page.state.name
        ),
        &format!(
            "All {} branches in {} with IFSC and MICR details.",
            page.bank.name, page.city.name
        ),
        Some(&format!("{base_url}{}", page.city.path)),
        &body,
    )
}

fn detail_row(html: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        html.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            html_escape(label),
            html_escape(value)
        ));
    }
}

fn flag(value: Option<bool>) -> Option<&'static str> {
    value.map(|enabled| if enabled { "Yes" } else { "No" })
}

pub fn branch_page(base_url: &str, branch: &BranchDto) -> String {
    let mut table = String::from("<table>\n");
    detail_row(&mut table, "IFSC", Some(&branch.ifsc));
    detail_row(&mut table, "Bank", branch.bank.as_deref());
    detail_row(&mut table, "Branch", branch.branch.as_deref());
    detail_row(&mut table, "Address", branch.address.as_deref());
    detail_row(&mut table, "City", branch.city.as_deref());
    detail_row(&mut table, "District", branch.district.as_deref());
    detail_row(&mut table, "State", branch.state.as_deref());
    detail_row(&mut table, "Centre", branch.centre.as_deref());
    detail_row(&mut table, "Contact", branch.contact.as_deref());
    detail_row(&mut table, "MICR", branch.micr.as_deref());
    detail_row(&mut table, "SWIFT", branch.swift.as_deref());
    detail_row(&mut table, "IMPS", flag(branch.imps));
    detail_row(&mut table, "NEFT", flag(branch.neft));
    detail_row(&mut table, "RTGS", flag(branch.rtgs));
    detail_row(&mut table, "UPI", flag(branch.upi));
    table.push_str("</table>");

    let bank = branch.bank.as_deref().unwrap_or("Bank");
    let place = branch
        .branch
        .as_deref()
        .or(branch.city.as_deref())
        .unwrap_or_default();

    let body = format!(
        "<h1>{} {}</h1>\n{table}",
        html_escape(&branch.ifsc),
        html_escape(&format!("{bank} {place}").trim().to_string())
    );
    layout(
        &format!("{}: {bank} {place}", branch.ifsc),
        &format!(
            "IFSC {} belongs to {bank} {place}. Address, MICR and payment services.",
            branch.ifsc
        ),
        Some(&format!("{base_url}/ifsc/{}", branch.ifsc)),
        &body,
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let heading = if status == StatusCode::NOT_FOUND {
        "Not found"
    } else {
        status.canonical_reason().unwrap_or("Error")
    };
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/banks\">Browse all banks</a></p>",
        html_escape(heading),
        html_escape(message)
    );
    layout(heading, message, None, &body)
}
