//! List view filter: search plus pagination over a collection
//!
//! Every call derives a fresh page from the records it is given; nothing is
//! cached between calls.

use crate::domain::Entity;
use crate::shared::{PaginatedResult, PaginationParams, SearchScope};

/// Search text and page requested by a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring; empty matches everything.
    pub search: String,
    /// 1-indexed; out-of-range pages give an empty result.
    pub page: u32,
    pub page_size: u32,
    pub scope: SearchScope,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, page: u32, page_size: u32) -> Self {
        Self {
            search: search.into(),
            page,
            page_size,
            scope: SearchScope::Collection,
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }
}

/// Derive the requested page from `records`.
///
/// With [`SearchScope::Collection`] the matches are counted and paginated.
/// With [`SearchScope::Page`] the unfiltered collection is paginated first,
/// so `total` and `total_pages` describe the whole collection and the page
/// may hold fewer than `page_size` items even when more matches exist.
pub fn list_page<E: Entity>(records: &[E], query: &ListQuery) -> PaginatedResult<E> {
    let needle = query.search.to_lowercase();
    let params = PaginationParams::new(query.page, query.page_size);

    match query.scope {
        SearchScope::Collection => {
            let matched: Vec<&E> = records.iter().filter(|r| r.matches(&needle)).collect();
            let items = params.slice(&matched).iter().map(|r| (*r).clone()).collect();
            PaginatedResult::new(items, matched.len() as u64, query.page, query.page_size)
        }
        SearchScope::Page => {
            let items = params
                .slice(records)
                .iter()
                .filter(|r| r.matches(&needle))
                .cloned()
                .collect();
            PaginatedResult::new(items, records.len() as u64, query.page, query.page_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Permission, Role, User, UserStatus};

    fn roles(n: u32) -> Vec<Role> {
        (1..=n)
            .map(|id| Role {
                id,
                name: format!("Role {}", id),
                description: String::new(),
                permissions: String::new(),
            })
            .collect()
    }

    fn user(id: u32, username: &str, role: &str) -> User {
        User {
            id,
            username: username.into(),
            email: format!("{}@example.com", username),
            password: "secret1".into(),
            role: role.into(),
            status: UserStatus::Active,
        }
    }

    #[test]
    fn seven_roles_split_into_five_and_two() {
        let all = roles(7);
        let first = list_page(&all, &ListQuery::new("", 1, 5));
        let second = list_page(&all, &ListQuery::new("", 2, 5));
        let third = list_page(&all, &ListQuery::new("", 3, 5));

        assert_eq!(first.items.len(), 5);
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[0].id, 6);
        assert!(third.items.is_empty());
        assert_eq!(first.total_pages, 2);
        assert_eq!(third.total_pages, 2);
    }

    #[test]
    fn page_zero_is_empty_not_an_error() {
        let page = list_page(&roles(3), &ListQuery::new("", 0, 5));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn search_is_case_insensitive() {
        let users = vec![user(1, "alice", "Admin"), user(2, "bob", "Viewer")];
        let page = list_page(&users, &ListQuery::new("ADMIN", 1, 5));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].username, "alice");
    }

    #[test]
    fn filtering_happens_before_pagination_by_default() {
        let mut users: Vec<User> = (1..=6).map(|id| user(id, &format!("user{}", id), "Viewer")).collect();
        users.push(user(7, "zed", "Admin"));

        let page = list_page(&users, &ListQuery::new("admin", 1, 5));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 7);
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_scope_only_searches_the_current_page() {
        let mut users: Vec<User> = (1..=6).map(|id| user(id, &format!("user{}", id), "Viewer")).collect();
        users.push(user(7, "zed", "Admin"));

        let first = list_page(&users, &ListQuery::new("admin", 1, 5).with_scope(SearchScope::Page));
        assert!(first.items.is_empty());
        assert_eq!(first.total, 7);
        assert_eq!(first.total_pages, 2);

        let second = list_page(&users, &ListQuery::new("admin", 2, 5).with_scope(SearchScope::Page));
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].username, "zed");
    }

    #[test]
    fn no_match_gives_zero_pages() {
        let perms = vec![Permission {
            id: 1,
            name: "Read".into(),
            description: "View content".into(),
            role: "Viewer".into(),
        }];
        let page = list_page(&perms, &ListQuery::new("delete", 1, 5));
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn query_is_not_trimmed() {
        let all = roles(2);
        let page = list_page(&all, &ListQuery::new("role 2", 1, 5));
        assert_eq!(page.items.len(), 1);
        let page = list_page(&all, &ListQuery::new(" role", 1, 5));
        assert!(page.items.is_empty());
    }
}
