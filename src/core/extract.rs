use scraper::{ElementRef, Html, Selector};

/// 從頁面標記萃取有序、去重後的供應商顯示名稱。
///
/// 兩段式策略：先找供應商個人頁連結，一筆都沒有才退回表格第一欄。
/// 兩種策略絕不合併，同一頁面只採用單一排序來源。
pub fn extract_vendor_names(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let names = vendor_profile_links(&document);
    if !names.is_empty() {
        return names;
    }

    table_first_columns(&document)
}

fn vendor_profile_links(document: &Html) -> Vec<String> {
    let link_selector = Selector::parse(r#"a[href*="/vendors/"]"#).unwrap();

    let mut names = Vec::new();
    for link in document.select(&link_selector) {
        push_unique(&mut names, element_text(&link));
    }
    names
}

fn table_first_columns(document: &Html) -> Vec<String> {
    let row_selector = Selector::parse("table tbody tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let mut names = Vec::new();
    for row in document.select(&row_selector) {
        if let Some(cell) = row.select(&cell_selector).next() {
            push_unique(&mut names, element_text(&cell));
        }
    }
    names
}

/// 可見文字，內部空白折疊為單一空格並去除前後空白
fn element_text(element: &ElementRef) -> String {
    let fragments: Vec<&str> = element.text().collect();
    fragments
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_unique(names: &mut Vec<String>, name: String) {
    if !name.is_empty() && !names.contains(&name) {
        names.push(name);
    }
}
