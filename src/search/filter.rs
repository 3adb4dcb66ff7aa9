use super::{Item, Query};

/// Return the items whose name contains `query`, ignoring case.
///
/// Only [`Item::name`] is searched. The original relative order of `items` is
/// kept. Callers are expected to short-circuit on an empty query, which would
/// otherwise match every item.
pub fn filter<'a>(query: &Query, items: &'a [Item]) -> Vec<&'a Item> {
	items
		.iter()
		.filter(|item| name_matches(&item.name, query))
		.collect()
}

fn name_matches(name: &str, query: &Query) -> bool {
	name.to_lowercase().contains(query.as_str())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn people() -> Vec<Item> {
		vec![
			Item::new("Alice", "A", "/a"),
			Item::new("Bob", "B", "/b"),
			Item::new("Malika", "Alpha", "/m"),
		]
	}

	#[test]
	fn matches_substring_ignoring_case() {
		let items = people();
		let matched = filter(&Query::from_input("ALI"), &items);
		let names: Vec<_> = matched.iter().map(|item| item.name.as_str()).collect();
		assert_eq!(names, ["Alice", "Malika"]);
	}

	#[test]
	fn only_the_name_is_searched() {
		let items = people();
		assert!(filter(&Query::from_input("alpha"), &items).is_empty());
		assert!(filter(&Query::from_input("/b"), &items).is_empty());
	}

	#[test]
	fn result_is_an_ordered_subset() {
		let items = people();
		for query in ["a", "b", "li", "x", "ALICE"] {
			let matched = filter(&Query::from_input(query), &items);
			let positions: Vec<usize> = matched
				.iter()
				.map(|m| items.iter().position(|item| std::ptr::eq(item, *m)).unwrap())
				.collect();
			assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{query}");
		}
	}

	#[test]
	fn no_items_yields_nothing() {
		assert!(filter(&Query::from_input("al"), &[]).is_empty());
	}

	#[test]
	fn non_ascii_names_fold_case() {
		let items = vec![Item::new("Ärger", "", "/x")];
		assert_eq!(filter(&Query::from_input("ÄR"), &items).len(), 1);
	}
}
