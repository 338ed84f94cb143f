//! HTML views for the form pages and result tables.
//!
//! The pages here are deliberately plain: a shared layout, a filter form,
//! and tables over the flattened upstream records. All upstream text is
//! escaped before it reaches the page.

use nws_client::{AlertRecord, GlossaryEntry};

const STATUS_OPTIONS: &[&str] = &["actual", "exercise", "system", "test", "draft"];
const MESSAGE_TYPE_OPTIONS: &[&str] = &["alert", "update", "cancel"];
const REGION_OPTIONS: &[&str] = &["AL", "AT", "GL", "GM", "PA", "PI"];
const REGION_TYPE_OPTIONS: &[&str] = &["land", "marine"];
const URGENCY_OPTIONS: &[&str] = &["Immediate", "Expected", "Future", "Past", "Unknown"];
const SEVERITY_OPTIONS: &[&str] = &["Extreme", "Severe", "Moderate", "Minor", "Unknown"];
const CERTAINTY_OPTIONS: &[&str] = &["Observed", "Likely", "Possible", "Unlikely", "Unknown"];

pub fn home_page() -> String {
    let body = concat!(
        "<h1>Weather Alerts</h1>\n",
        "<p>Query the National Weather Service alerts API.</p>\n",
        "<div class=\"nav\">\n",
        "<button type=\"button\" class=\"nav-button\" data-url=\"/alerts\">Alerts</button>\n",
        "<button type=\"button\" class=\"nav-button\" data-url=\"/glossary\">Glossary</button>\n",
        "<button type=\"button\" class=\"nav-button\" data-url=\"/stations\">Stations</button>\n",
        "</div>\n",
    );
    layout("Weather Alerts", body)
}

pub fn stations_page() -> String {
    let body = concat!(
        "<h1>Stations</h1>\n",
        "<p>Station lookups are not wired up yet.</p>\n",
        "<div class=\"nav\">\n",
        "<button type=\"button\" class=\"nav-button\" data-url=\"/\">Home</button>\n",
        "</div>\n",
    );
    layout("Stations", body)
}

pub fn alerts_form_page() -> String {
    let mut body = String::from("<h1>Alert Filters</h1>\n<form method=\"post\" action=\"/alerts\">\n");

    body.push_str("<label>Active only<input type=\"checkbox\" name=\"active\"></label>\n");
    body.push_str("<label>Start<input type=\"datetime-local\" name=\"start_time\"></label>\n");
    body.push_str("<label>End<input type=\"datetime-local\" name=\"end_time\"></label>\n");

    body.push_str(&select_field("Status", "status", STATUS_OPTIONS));
    body.push_str(&select_field(
        "Message type",
        "message_type",
        MESSAGE_TYPE_OPTIONS,
    ));

    body.push_str(&repeat_field("Event types", "event"));
    body.push_str(&repeat_field("Event codes", "code"));
    body.push_str(&repeat_field("Areas (state/territory)", "area"));
    body.push_str(&repeat_field("Points (lat,lon)", "point"));
    body.push_str(&repeat_field("Zones", "zone"));

    body.push_str(&select_field("Marine region", "region", REGION_OPTIONS));
    body.push_str(&select_field(
        "Region type",
        "region_type",
        REGION_TYPE_OPTIONS,
    ));
    body.push_str(&select_field("Urgency", "urgency", URGENCY_OPTIONS));
    body.push_str(&select_field("Severity", "severity", SEVERITY_OPTIONS));
    body.push_str(&select_field("Certainty", "certainty", CERTAINTY_OPTIONS));

    body.push_str("<label>Limit<input type=\"number\" name=\"limit\" min=\"1\"></label>\n");
    body.push_str("<label>Cursor<input type=\"text\" name=\"cursor\"></label>\n");

    body.push_str("<button type=\"submit\">Search</button>\n</form>\n");
    body.push_str("<div class=\"nav\"><button type=\"button\" class=\"nav-button\" data-url=\"/\">Home</button></div>\n");

    layout("Alert Filters", &body)
}

pub fn alerts_results_page(records: &[AlertRecord]) -> String {
    let mut body = String::from("<h1>Alerts</h1>\n");

    if records.is_empty() {
        body.push_str("<p>No alerts matched the query.</p>\n");
    } else {
        body.push_str("<table>\n<tr>");
        for heading in [
            "Event",
            "Area",
            "Severity",
            "Certainty",
            "Urgency",
            "Effective",
            "Onset",
            "Expires",
            "Ends",
            "Sender",
            "Headline",
            "Description",
            "Instruction",
            "Response",
        ] {
            body.push_str(&format!("<th>{heading}</th>"));
        }
        body.push_str("</tr>\n");

        for record in records {
            body.push_str("<tr>");
            for value in [
                &record.event,
                &record.area_desc,
                &record.severity,
                &record.certainty,
                &record.urgency,
                &record.effective,
                &record.onset,
                &record.expires,
                &record.ends,
                &record.sender_name,
                &record.headline,
                &record.description,
                &record.instruction,
                &record.response,
            ] {
                body.push_str(&format!("<td>{}</td>", cell(value)));
            }
            body.push_str("</tr>\n");
        }
        body.push_str("</table>\n");
    }

    body.push_str("<div class=\"nav\"><button type=\"button\" class=\"nav-button\" data-url=\"/alerts\">New search</button></div>\n");
    layout("Alerts", &body)
}

pub fn glossary_page(entries: &[GlossaryEntry]) -> String {
    let mut body = String::from("<h1>Glossary</h1>\n");

    if entries.is_empty() {
        body.push_str("<p>No glossary entries returned.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>Term</th><th>Definition</th></tr>\n");
        for entry in entries {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                cell(&entry.term),
                cell(&entry.definition)
            ));
        }
        body.push_str("</table>\n");
    }

    body.push_str("<div class=\"nav\"><button type=\"button\" class=\"nav-button\" data-url=\"/\">Home</button></div>\n");
    layout("Glossary", &body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<h1>Upstream error</h1>\n<p>{}</p>\n<div class=\"nav\"><button type=\"button\" class=\"nav-button\" data-url=\"/alerts\">Back</button></div>\n",
        escape(message)
    );
    layout("Error", &body)
}

fn layout(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{title}</title>\n",
            "<link rel=\"stylesheet\" href=\"/static/style.css\">\n",
            "<script src=\"/static/app.js\" defer></script>\n",
            "</head>\n",
            "<body>\n{body}</body>\n",
            "</html>\n",
        ),
        title = escape(title),
        body = body,
    )
}

fn select_field(label: &str, name: &str, options: &[&str]) -> String {
    let mut options_html = String::from("<option value=\"\"></option>");
    for option in options {
        let option = escape(option);
        options_html.push_str(&format!("<option value=\"{option}\">{option}</option>"));
    }
    format!("<label>{label}<select name=\"{name}\">{options_html}</select></label>\n")
}

/// A repeatable input group; app.js adds and removes extra inputs.
fn repeat_field(label: &str, name: &str) -> String {
    format!(
        concat!(
            "<div class=\"repeat-group\" data-name=\"{name}\">\n",
            "<label>{label}</label>\n",
            "<div class=\"values\"><input type=\"text\" name=\"{name}\"></div>\n",
            "<button type=\"button\" class=\"add-value\">Add</button>\n",
            "</div>\n",
        ),
        label = label,
        name = name,
    )
}

fn cell(value: &Option<String>) -> String {
    escape(value.as_deref().unwrap_or(""))
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
