//! Index page view model

use serde::Serialize;

use crate::domain::Item;
use crate::service::ListsSnapshot;

pub const DAILY_TITLE: &str = "Today";
pub const WEEKLY_TITLE: &str = "This Week";
pub const MONTHLY_TITLE: &str = "This Month";

/// Six slots: a heading and the ordered rows for each list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListsPage {
    pub list_title: String,
    pub list_items: Vec<Item>,
    pub week_list_title: String,
    pub week_list_items: Vec<Item>,
    pub month_list_title: String,
    pub month_list_items: Vec<Item>,
}

impl From<ListsSnapshot> for ListsPage {
    fn from(lists: ListsSnapshot) -> Self {
        Self {
            list_title: DAILY_TITLE.to_string(),
            list_items: lists.daily,
            week_list_title: WEEKLY_TITLE.to_string(),
            week_list_items: lists.weekly,
            month_list_title: MONTHLY_TITLE.to_string(),
            month_list_items: lists.monthly,
        }
    }
}
