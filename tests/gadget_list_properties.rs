use gadget_list::{DaySet, Gadget, GadgetList, Weekday};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn gadget(name: &str, days: &[Weekday]) -> Gadget {
    Gadget::new(name, days.iter().copied().collect())
}

fn names(list: &GadgetList) -> Vec<String> {
    list.iter().map(|g| g.name().to_owned()).collect()
}

fn build(items: &[String]) -> GadgetList {
    items.iter().map(|n| Gadget::new(n.as_str(), DaySet::new())).collect()
}

fn name_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z]{1,6}", 0..24)
}

proptest! {
    #[test]
    fn appends_keep_order_and_count(items in name_list()) {
        let mut list = GadgetList::new();
        for name in &items {
            list.append(Gadget::new(name.as_str(), DaySet::new()));
        }
        prop_assert_eq!(list.len(), items.len());
        prop_assert_eq!(names(&list), items);
    }

    #[test]
    fn insert_at_front_prepends(items in name_list()) {
        let mut list = build(&items);
        list.insert_at(0, gadget("front", &[])).unwrap();

        let mut expected = vec!["front".to_owned()];
        expected.extend(items.iter().cloned());
        prop_assert_eq!(names(&list), expected);
    }

    #[test]
    fn insert_at_matches_vec_insert(items in name_list(), seed in any::<usize>()) {
        let position = seed % (items.len() + 1);
        let mut list = build(&items);
        list.insert_at(position, gadget("new", &[])).unwrap();

        let mut expected = items.clone();
        expected.insert(position, "new".to_owned());
        prop_assert_eq!(names(&list), expected);
        prop_assert_eq!(list.len(), items.len() + 1);
    }

    #[test]
    fn insert_past_end_is_rejected(items in name_list(), extra in 1usize..100) {
        let mut list = build(&items);
        let position = items.len() + extra;
        prop_assert!(list.insert_at(position, gadget("late", &[])).is_err());
        prop_assert_eq!(list.len(), items.len());
        prop_assert_eq!(names(&list), items);
    }

    #[test]
    fn removing_absent_name_is_a_no_op(items in name_list()) {
        let mut list = build(&items);
        // Generated names are alphabetic only.
        prop_assert!(!list.remove_by_name("not-there"));
        prop_assert_eq!(list.len(), items.len());
    }

    #[test]
    fn remove_matches_first_vec_position(items in name_list(), seed in any::<usize>()) {
        prop_assume!(!items.is_empty());
        let target = items[seed % items.len()].clone();
        let mut list = build(&items);

        prop_assert!(list.remove_by_name(&target));
        let mut expected = items.clone();
        let first = expected.iter().position(|n| *n == target).unwrap();
        expected.remove(first);
        prop_assert_eq!(names(&list), expected);
    }

    #[test]
    fn reverse_is_an_involution(items in name_list()) {
        let mut list = build(&items);
        list.reverse();
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(names(&list), reversed);

        list.reverse();
        prop_assert_eq!(names(&list), items);
    }

    #[test]
    fn clear_always_empties(items in name_list()) {
        let mut list = build(&items);
        list.clear();
        prop_assert_eq!(list.len(), 0);
        prop_assert!(list.iter().next().is_none());
    }
}

#[test]
fn carry_scenario() {
    let mut list = GadgetList::new();
    list.append(gadget("Phone", &[Weekday::Monday]));
    list.append(gadget("Watch", &[]));
    list.append(gadget("Keys", &[Weekday::Monday, Weekday::Friday]));
    assert_eq!(list.len(), 3);

    list.reverse();
    assert_eq!(names(&list), vec!["Keys", "Watch", "Phone"]);

    assert!(list.remove_by_name("Watch"));
    assert_eq!(list.len(), 2);

    let phone = list.find_by_name("Phone").expect("Phone is still listed");
    assert_eq!(phone.to_string(), "Phone - Carried on: Monday");
    assert!(list.find_by_name("Wallet").is_none());
}
