//! HTML rendering for the index page
//!
//! Every list gets the same three forms; only the hidden `tableName` value and the
//! delete field name differ.

use super::page::ListsPage;
use crate::domain::{DeleteSelector, Item, ListTable};

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full index document
pub fn render_index(page: &ListsPage) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Lists</title>\n\
         <link rel=\"stylesheet\" href=\"/styles/main.css\">\n\
         </head>\n<body>\n<main class=\"lists\">\n",
    );

    render_list(&mut html, &page.list_title, &page.list_items, ListTable::Daily);
    render_list(&mut html, &page.week_list_title, &page.week_list_items, ListTable::Weekly);
    render_list(&mut html, &page.month_list_title, &page.month_list_items, ListTable::Monthly);

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_list(html: &mut String, title: &str, items: &[Item], table: ListTable) {
    let table_name = table.as_str();
    let delete_field = DeleteSelector::field_name(table);

    html.push_str(&format!(
        "<section class=\"box\" id=\"{}\">\n<h1>{}</h1>\n<ul>\n",
        table_name,
        escape_html(title)
    ));

    for item in items {
        let title = escape_html(&item.title);
        html.push_str(&format!(
            "<li class=\"item\">\n\
             <form class=\"delete\" action=\"/delete\" method=\"post\">\
             <button type=\"submit\" name=\"{delete_field}\" value=\"{id}\">&#10003;</button>\
             </form>\n\
             <form class=\"edit\" action=\"/edit\" method=\"post\">\
             <input type=\"hidden\" name=\"updatedItemId\" value=\"{id}\">\
             <input type=\"hidden\" name=\"tableName\" value=\"{table_name}\">\
             <input type=\"text\" name=\"updatedItemTitle\" value=\"{title}\" autocomplete=\"off\">\
             <button type=\"submit\">Save</button>\
             </form>\n</li>\n",
            id = item.id,
        ));
    }

    html.push_str(&format!(
        "</ul>\n\
         <form class=\"add\" action=\"/add\" method=\"post\">\
         <input type=\"hidden\" name=\"tableName\" value=\"{table_name}\">\
         <input type=\"text\" name=\"newItem\" placeholder=\"New Item\" autocomplete=\"off\" autofocus>\
         <button type=\"submit\">+</button>\
         </form>\n</section>\n"
    ));
}
