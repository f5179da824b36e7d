use std::cmp::Reverse;

use clap::ValueEnum;

use crate::story::Story;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Sort {
    /// Most liked first, newer updates breaking ties.
    #[default]
    Likes,
    /// Most recently updated first.
    Latest,
}

/// Which stories a page shows and in what order.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub tag: Option<u64>,
    pub search: Option<String>,
    pub sort: Sort,
}

/// Approved stories matching `query`, ordered for display.
///
/// With a search term, relevance ranks first and the sort key breaks ties.
pub fn list_stories(stories: Vec<Story>, query: &ListQuery) -> Vec<Story> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut shown: Vec<Story> = stories
        .into_iter()
        .filter(|s| s.is_approved)
        .filter(|s| match query.tag {
            Some(tag) if tag != 0 => s.tags.iter().any(|t| t.id == tag),
            _ => true,
        })
        .filter(|s| match &needle {
            Some(needle) => [&s.title, &s.body, &s.name]
                .iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
            None => true,
        })
        .collect();

    match query.sort {
        Sort::Likes => shown.sort_by(|a, b| {
            b.likes
                .cmp(&a.likes)
                .then_with(|| b.updated_at.cmp(&a.updated_at))
        }),
        Sort::Latest => shown.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }

    if let Some(needle) = &needle {
        // Stable, so equal keys keep the order above.
        match query.sort {
            Sort::Likes => shown.sort_by_key(|s| Reverse((relevance(s, needle), s.likes))),
            Sort::Latest => {
                shown.sort_by_cached_key(|s| Reverse((relevance(s, needle), s.updated_at.clone())))
            }
        }
    }
    shown
}

/// Occurrences of `needle` (already lowercase): title counts double.
pub fn relevance(story: &Story, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let count = |field: &str| field.to_lowercase().matches(needle).count();
    count(&story.title) * 2 + count(&story.body) + count(&story.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::Tag;

    fn story(id: u64, title: &str, body: &str, likes: u64, updated_at: &str) -> Story {
        Story {
            id,
            name: "anon".to_string(),
            title: title.to_string(),
            body: body.to_string(),
            likes,
            created_at: None,
            updated_at: Some(updated_at.to_string()),
            image_path: None,
            is_approved: true,
            tags: Vec::new(),
        }
    }

    fn ids(stories: &[Story]) -> Vec<u64> {
        stories.iter().map(|s| s.id).collect()
    }

    #[test]
    fn hides_unapproved_and_sorts_by_likes_then_update() {
        let mut pending = story(4, "pending", "", 99, "2025-06-01");
        pending.is_approved = false;
        let stories = vec![
            story(1, "a", "", 5, "2025-01-01"),
            story(2, "b", "", 9, "2025-01-01"),
            story(3, "c", "", 5, "2025-03-01"),
            pending,
        ];
        assert_eq!(ids(&list_stories(stories, &ListQuery::default())), vec![2, 3, 1]);
    }

    #[test]
    fn latest_orders_by_update_time() {
        let stories = vec![
            story(1, "a", "", 50, "2025-01-01"),
            story(2, "b", "", 1, "2025-05-01"),
            story(3, "c", "", 9, "2025-03-01"),
        ];
        let query = ListQuery {
            sort: Sort::Latest,
            ..ListQuery::default()
        };
        assert_eq!(ids(&list_stories(stories, &query)), vec![2, 3, 1]);
    }

    #[test]
    fn tag_filter() {
        let mut tagged = story(1, "a", "", 0, "2025-01-01");
        tagged.tags.push(Tag {
            id: 3,
            name: "strangers".to_string(),
        });
        let stories = vec![tagged, story(2, "b", "", 10, "2025-01-01")];
        let query = ListQuery {
            tag: Some(3),
            ..ListQuery::default()
        };
        assert_eq!(ids(&list_stories(stories, &query)), vec![1]);
    }

    #[test]
    fn relevance_weights_title_double() {
        let mut s = story(1, "Rain and RAIN", "it rained", 0, "2025-01-01");
        s.name = "rainy".to_string();
        assert_eq!(relevance(&s, "rain"), 2 * 2 + 1 + 1);
        assert_eq!(relevance(&s, "snow"), 0);
    }

    #[test]
    fn search_filters_case_insensitively_and_ranks_by_relevance() {
        let stories = vec![
            story(1, "Umbrella", "an umbrella in the rain", 100, "2025-01-01"),
            story(2, "Coffee", "nothing related", 500, "2025-01-01"),
            story(3, "Bus", "umbrella", 1, "2025-01-01"),
            story(4, "Umbrella umbrella", "", 0, "2025-01-01"),
        ];
        let query = ListQuery {
            search: Some("  UMBRELLA ".to_string()),
            ..ListQuery::default()
        };
        // relevance: 1 → 3, 3 → 1, 4 → 4
        assert_eq!(ids(&list_stories(stories, &query)), vec![4, 1, 3]);
    }

    #[test]
    fn blank_search_is_no_search() {
        let stories = vec![
            story(1, "a", "", 1, "2025-01-01"),
            story(2, "b", "", 2, "2025-01-01"),
        ];
        let query = ListQuery {
            search: Some("   ".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(ids(&list_stories(stories, &query)), vec![2, 1]);
    }
}
