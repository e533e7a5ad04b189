use crate::models::DisplayRow;
use super::format::{css_token, escape_html};

/// Destination a refresh cycle writes rows into
pub trait RenderTarget: Send {
    /// Drop every rendered row
    fn clear(&mut self);

    /// Append one row after the existing ones
    fn append_row(&mut self, row: &DisplayRow);

    fn row_count(&self) -> usize;
}

/// HTML table whose body is replaced on every successful refresh
#[derive(Debug, Clone)]
pub struct HtmlTable {
    id: String,
    headers: Vec<String>,
    rows: Vec<String>,
}

impl HtmlTable {
    /// Create a new table with the given element id and headers
    pub fn new(id: &str, headers: Vec<&str>) -> Self {
        HtmlTable {
            id: id.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// The trades table shown on the dashboard
    pub fn trades() -> Self {
        Self::new(
            "trades-table",
            vec!["ID", "Client", "Asset", "Initial", "Final", "P/L", "Status", "Blockchain"],
        )
    }

    /// Rendered `<tr>` elements of the body, in order
    #[cfg(test)]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Render the whole table
    pub fn render(&self) -> String {
        let mut output = format!("<table id=\"{}\">\n  <thead>\n    <tr>", escape_html(&self.id));
        for header in &self.headers {
            output.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        output.push_str("</tr>\n  </thead>\n  <tbody>\n");

        for row in &self.rows {
            output.push_str("    ");
            output.push_str(row);
            output.push('\n');
        }

        output.push_str("  </tbody>\n</table>");
        output
    }

    fn render_row(row: &DisplayRow) -> String {
        format!(
            "<tr>\
             <td>{short_id}</td>\
             <td>{client_id}</td>\
             <td>{asset_id}</td>\
             <td>{initial}</td>\
             <td>{final_amount}</td>\
             <td class=\"{pnl_class}\" style=\"color: {pnl_color}\">{pnl}</td>\
             <td><span class=\"status {status_class}\">{status}</span></td>\
             <td><a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">View NFT</a></td>\
             </tr>",
            short_id = escape_html(&row.short_id),
            client_id = escape_html(&row.client_id),
            asset_id = escape_html(&row.asset_id),
            initial = escape_html(&row.initial_amount),
            final_amount = escape_html(&row.final_amount),
            pnl_class = row.pnl_style.css_class(),
            pnl_color = row.pnl_style.color(),
            pnl = escape_html(&row.profit_loss),
            status_class = css_token(&row.status),
            status = escape_html(&row.status),
            url = escape_html(&row.explorer_url),
        )
    }
}

impl RenderTarget for HtmlTable {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: &DisplayRow) {
        self.rows.push(Self::render_row(row));
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }
}
