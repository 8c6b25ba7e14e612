//! Filtering and pagination for list screens

use serde::{Deserialize, Serialize};

use crate::models::{StudentPlan, StudentStatus};
use crate::timeline::Timeline;
use crate::types::PaginatedResponse;

/// Program list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramFilter {
    #[default]
    All,
    Active,
    /// Not active: expired or not yet started
    Inactive,
}

impl ProgramFilter {
    pub fn matches(self, timeline: &Timeline) -> bool {
        match self {
            ProgramFilter::All => true,
            ProgramFilter::Active => timeline.is_active,
            ProgramFilter::Inactive => !timeline.is_active,
        }
    }
}

/// Status tab plus free-text search over name, phone and plan title.
/// A blank query matches everything.
pub fn student_matches(plan: &StudentPlan, status: StudentStatus, query: &str) -> bool {
    if plan.status != status {
        return false;
    }
    let query = query.trim();
    query.is_empty()
        || plan.full_name.contains(query)
        || plan.phone.contains(query)
        || plan.plan_title.contains(query)
}

/// Slice one page out of `items`.
///
/// There is always at least one page, and `page` is clamped into range, so an
/// out-of-range request returns the last page rather than nothing.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> PaginatedResponse<T> {
    let per_page = per_page.max(1);
    let total = items.len() as u64;
    let total_pages = (total.div_ceil(u64::from(per_page))).max(1) as u32;
    let page = page.clamp(1, total_pages);
    let start = (page as usize - 1) * per_page as usize;

    let data = items
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    PaginatedResponse {
        data,
        total,
        page,
        per_page,
        total_pages,
    }
}
