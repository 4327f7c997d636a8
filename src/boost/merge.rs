//! Relevance tag merging
//!
//! Combines boosted tags with tags from another source (typically the
//! external classifier) into one set with a single entry per tag name.

use std::collections::HashMap;

use super::entry::RelevanceTag;

/// Union of two relevance tag sets, keeping the highest relevance per name.
///
/// Within one side the first occurrence of a name wins. Across sides the
/// strictly greater relevance wins and ties go to `first`. Output lists
/// `first`'s names in order of appearance, then names only in `second`;
/// callers should treat it as a set.
pub fn combine_relevance_tags(
    first: &[RelevanceTag],
    second: &[RelevanceTag],
) -> Vec<RelevanceTag> {
    let first_by_name = NameIndex::build(first);
    let second_by_name = NameIndex::build(second);

    let mut combined = Vec::with_capacity(first.len() + second.len());

    for (name, tag) in first_by_name.iter() {
        let winner = match second_by_name.get(name) {
            Some(other) if other.relevance > tag.relevance => other,
            _ => tag,
        };
        combined.push((**winner).clone());
    }

    for (name, tag) in second_by_name.iter() {
        if first_by_name.get(name).is_none() {
            combined.push((**tag).clone());
        }
    }

    combined
}

/// Tag name to first relevance tag, in first-appearance order
struct NameIndex<'a> {
    order: Vec<(&'a str, &'a RelevanceTag)>,
    positions: HashMap<&'a str, usize>,
}

impl<'a> NameIndex<'a> {
    fn build(tags: &'a [RelevanceTag]) -> Self {
        let mut index = Self {
            order: Vec::with_capacity(tags.len()),
            positions: HashMap::with_capacity(tags.len()),
        };

        for tag in tags {
            let name = tag.name();
            if !index.positions.contains_key(name) {
                index.positions.insert(name, index.order.len());
                index.order.push((name, tag));
            }
        }

        index
    }

    fn get(&self, name: &str) -> Option<&&'a RelevanceTag> {
        self.positions.get(name).map(|&i| &self.order[i].1)
    }

    fn iter(&self) -> impl Iterator<Item = &(&'a str, &'a RelevanceTag)> + '_ {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boost::entry::Tag;
    use std::collections::HashMap;

    fn rt(name: &str, relevance: f32) -> RelevanceTag {
        RelevanceTag::new(Tag::named(name), relevance)
    }

    fn as_map(tags: &[RelevanceTag]) -> HashMap<String, f32> {
        tags.iter().map(|t| (t.tag.name.clone(), t.relevance)).collect()
    }

    #[test]
    fn test_union_keeps_max_relevance() {
        let boosted = vec![rt("Socialdemokraterna", 1.0), rt("Moderaterna", 0.2)];
        let classified = vec![rt("Moderaterna", 0.7), rt("Skola", 0.4), rt("Socialdemokraterna", 0.5)];

        let combined = combine_relevance_tags(&boosted, &classified);
        assert_eq!(combined.len(), 3);

        let map = as_map(&combined);
        assert_eq!(map["Socialdemokraterna"], 1.0);
        assert_eq!(map["Moderaterna"], 0.7);
        assert_eq!(map["Skola"], 0.4);
    }

    #[test]
    fn test_tie_keeps_first_side() {
        let mut first = rt("Centerpartiet", 0.5);
        first.tag.kind = Some("party".to_string());
        let second = rt("Centerpartiet", 0.5);

        let combined = combine_relevance_tags(&[first.clone()], &[second]);
        assert_eq!(combined, vec![first]);
    }

    #[test]
    fn test_empty_side_is_identity() {
        let tags = vec![rt("Piratpartiet", 0.3), rt("Junilistan", 0.9)];
        assert_eq!(as_map(&combine_relevance_tags(&tags, &[])), as_map(&tags));
        assert_eq!(as_map(&combine_relevance_tags(&[], &tags)), as_map(&tags));
        assert!(combine_relevance_tags(&[], &[]).is_empty());
    }

    #[test]
    fn test_first_occurrence_wins_within_side() {
        let first = vec![rt("Vänsterpartiet", 0.3), rt("Vänsterpartiet", 0.9)];
        let combined = combine_relevance_tags(&first, &[]);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].relevance, 0.3);

        let second = vec![rt("Vänsterpartiet", 0.4), rt("Vänsterpartiet", 0.1)];
        let combined = combine_relevance_tags(&first, &second);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].relevance, 0.4);
    }

    #[test]
    fn test_one_entry_per_name() {
        let first = vec![rt("A", 1.0), rt("B", 1.0), rt("A", 1.0)];
        let second = vec![rt("B", 0.1), rt("C", 0.2), rt("C", 0.3)];
        let combined = combine_relevance_tags(&first, &second);

        let mut names: Vec<_> = combined.iter().map(|t| t.tag.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
