//! Page bodies

use chrono::NaiveDate;

use super::{escape, layout, Flash};
use crate::domain::entities::{BloodGroup, DonationWithDonor, Donor, DonorPage, StockLevel};

/// Current registry search, echoed back into the form and page links
#[derive(Debug, Clone, Default)]
pub struct DonorFilters {
    pub search: String,
    pub group: String,
}

fn group_options(selected: &str, with_any: bool) -> String {
    let mut buf = String::new();
    if with_any {
        buf.push_str("<option value=\"\">All groups</option>");
    }
    for group in BloodGroup::ALL {
        let marker = if group.as_str() == selected {
            " selected"
        } else {
            ""
        };
        buf.push_str(&format!(
            "<option value=\"{0}\"{1}>{0}</option>",
            group.as_str(),
            marker
        ));
    }
    buf
}

fn stock_rows(levels: &[StockLevel]) -> String {
    let mut buf = String::new();
    for level in levels {
        buf.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            level.blood_group,
            level.units,
            level.threshold,
            level.status()
        ));
    }
    buf
}

/// GET /
pub fn dashboard_page(stock: &[StockLevel], alerts: &[StockLevel], flash: Option<&Flash>) -> String {
    let mut body = String::new();

    body.push_str("<h2>Stock Levels</h2>\n<table>\n");
    body.push_str("<tr><th>Blood Group</th><th>Units</th><th>Threshold</th><th>Status</th></tr>\n");
    body.push_str(&stock_rows(stock));
    body.push_str("</table>\n");

    body.push_str("<h2>Low Stock Alerts</h2>\n");
    if alerts.is_empty() {
        body.push_str("<p>No low stock alerts.</p>\n");
    } else {
        body.push_str("<ul class=\"alerts\">\n");
        for alert in alerts {
            body.push_str(&format!(
                "<li>{}: {} units (&lt;= threshold {})</li>\n",
                alert.blood_group, alert.units, alert.threshold
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Dashboard", flash, &body)
}

fn page_link(filters: &DonorFilters, page: u64) -> String {
    format!(
        "/donors?search={}&group={}&page={}",
        urlencoding::encode(&filters.search),
        urlencoding::encode(&filters.group),
        page
    )
}

/// GET /donors
pub fn donors_page(page: &DonorPage, filters: &DonorFilters, flash: Option<&Flash>) -> String {
    let mut body = String::new();

    body.push_str("<h2>Add Donor</h2>\n<form method=\"post\" action=\"/donors\">\n");
    body.push_str("<input name=\"name\" placeholder=\"Name\" required>\n");
    body.push_str(&format!(
        "<select name=\"blood_group\">{}</select>\n",
        group_options("", false)
    ));
    body.push_str("<input type=\"date\" name=\"last_donation\">\n");
    body.push_str("<button type=\"submit\">Add</button>\n</form>\n");

    body.push_str("<h2>Registry</h2>\n<form method=\"get\" action=\"/donors\">\n");
    body.push_str(&format!(
        "<input name=\"search\" value=\"{}\" placeholder=\"Search by name\">\n",
        escape(&filters.search)
    ));
    body.push_str(&format!(
        "<select name=\"group\">{}</select>\n",
        group_options(&filters.group, true)
    ));
    body.push_str("<button type=\"submit\">Filter</button>\n</form>\n");

    body.push_str("<table>\n<tr><th>ID</th><th>Name</th><th>Blood Group</th><th>Last Donation</th></tr>\n");
    for donor in &page.donors {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            donor.id,
            escape(&donor.name),
            donor.blood_group,
            donor
                .last_donation
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        ));
    }
    body.push_str("</table>\n");

    body.push_str(&format!(
        "<p>Page {} of {} ({} donors)</p>\n",
        page.page,
        page.total_pages.max(1),
        page.total_items
    ));
    if page.has_prev() {
        body.push_str(&format!(
            "<a href=\"{}\">Previous</a>\n",
            escape(&page_link(filters, page.page - 1))
        ));
    }
    if page.has_next() {
        body.push_str(&format!(
            "<a href=\"{}\">Next</a>\n",
            escape(&page_link(filters, page.page + 1))
        ));
    }

    layout("Donors", flash, &body)
}

/// GET /donate
pub fn donate_page(donors: &[Donor], today: NaiveDate, flash: Option<&Flash>) -> String {
    let mut body = String::new();

    body.push_str("<form method=\"post\" action=\"/donate\">\n");
    body.push_str("<select name=\"donor_id\">\n<option value=\"none\">Anonymous</option>\n");
    for donor in donors {
        body.push_str(&format!(
            "<option value=\"{}\">{} ({})</option>\n",
            donor.id,
            escape(&donor.name),
            donor.blood_group
        ));
    }
    body.push_str("</select>\n");
    body.push_str(&format!(
        "<select name=\"blood_group\">{}</select>\n",
        group_options("", false)
    ));
    body.push_str("<input type=\"number\" name=\"units\" value=\"1\" min=\"1\">\n");
    body.push_str(&format!(
        "<input type=\"date\" name=\"date\" value=\"{}\">\n",
        today.format("%Y-%m-%d")
    ));
    body.push_str("<button type=\"submit\">Record Donation</button>\n</form>\n");

    layout("Record Donation", flash, &body)
}

/// GET /donations
pub fn donations_page(donations: &[DonationWithDonor], flash: Option<&Flash>) -> String {
    let mut body = String::new();

    if donations.is_empty() {
        body.push_str("<p>No donations recorded yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr><th>ID</th><th>Donor</th><th>Blood Group</th><th>Units</th><th>Date</th></tr>\n");
        for entry in donations {
            let donor = entry
                .donor
                .as_ref()
                .map(|d| escape(&d.name))
                .unwrap_or_else(|| "Anonymous".to_string());
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                entry.donation.id,
                donor,
                entry.donation.blood_group,
                entry.donation.units,
                entry.donation.date.format("%Y-%m-%d")
            ));
        }
        body.push_str("</table>\n");
    }

    layout("Donations", flash, &body)
}

/// GET /use
pub fn use_page(flash: Option<&Flash>) -> String {
    let mut body = String::new();

    body.push_str("<form method=\"post\" action=\"/use\">\n");
    body.push_str(&format!(
        "<select name=\"blood_group\">{}</select>\n",
        group_options("", false)
    ));
    body.push_str("<input type=\"number\" name=\"units\" value=\"1\" min=\"1\">\n");
    body.push_str("<button type=\"submit\">Issue</button>\n</form>\n");

    layout("Issue Units", flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Donation, DonationId, DonorId, DONORS_PER_PAGE};

    fn donor(id: i32, name: &str) -> Donor {
        Donor {
            id: DonorId(id),
            name: name.to_string(),
            blood_group: BloodGroup::APositive,
            last_donation: None,
        }
    }

    #[test]
    fn dashboard_lists_alerts() {
        let low = StockLevel {
            blood_group: BloodGroup::ONegative,
            units: 1,
            threshold: 5,
        };
        let html = dashboard_page(&[low], &[low], None);
        assert!(html.contains("<td>O-</td><td>1</td><td>5</td><td>LOW</td>"));
        assert!(html.contains("O-: 1 units (&lt;= threshold 5)"));
    }

    #[test]
    fn dashboard_without_alerts() {
        let html = dashboard_page(&[], &[], None);
        assert!(html.contains("No low stock alerts."));
    }

    #[test]
    fn donors_page_keeps_filters_in_links() {
        let page = DonorPage {
            donors: vec![donor(1, "Rahul")],
            page: 2,
            per_page: DONORS_PER_PAGE,
            total_items: 25,
            total_pages: 3,
        };
        let filters = DonorFilters {
            search: "ra".to_string(),
            group: "A+".to_string(),
        };
        let html = donors_page(&page, &filters, None);
        assert!(html.contains("/donors?search=ra&amp;group=A%2B&amp;page=1"));
        assert!(html.contains("/donors?search=ra&amp;group=A%2B&amp;page=3"));
        assert!(html.contains("<option value=\"A+\" selected>A+</option>"));
    }

    #[test]
    fn donors_page_escapes_names() {
        let page = DonorPage {
            donors: vec![donor(1, "<b>Eve</b>")],
            page: 1,
            per_page: DONORS_PER_PAGE,
            total_items: 1,
            total_pages: 1,
        };
        let html = donors_page(&page, &DonorFilters::default(), None);
        assert!(html.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    }

    #[test]
    fn donate_page_preselects_today() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let html = donate_page(&[donor(3, "Tara")], today, None);
        assert!(html.contains("value=\"2025-07-01\""));
        assert!(html.contains("<option value=\"3\">Tara (A+)</option>"));
        assert!(html.contains("<option value=\"none\">Anonymous</option>"));
    }

    #[test]
    fn donations_page_shows_anonymous() {
        let entry = DonationWithDonor {
            donation: Donation {
                id: DonationId(1),
                donor_id: None,
                blood_group: BloodGroup::BNegative,
                units: 2,
                date: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap(),
            },
            donor: None,
        };
        let html = donations_page(&[entry], None);
        assert!(html.contains("<td>Anonymous</td><td>B-</td><td>2</td><td>2025-07-02</td>"));
    }
}
