use menu_core::{ChefControlForm, DemoMenu, MenuStore};
use proptest::prelude::*;
use shared::{Course, DishRecord, MenuError, Price};

#[derive(Debug, Clone)]
enum Op {
    Add(Course, u64),
    Remove(usize),
}

fn course_strategy() -> impl Strategy<Value = Course> {
    prop_oneof![
        Just(Course::Starter),
        Just(Course::Main),
        Just(Course::Dessert)
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (course_strategy(), 0u64..100_000).prop_map(|(course, cents)| Op::Add(course, cents)),
        (0usize..12).prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn count_is_adds_minus_successful_removes(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut store = MenuStore::new();
        let mut adds = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Add(course, cents) => {
                    store.add_item(course, "dish", Price::from_cents(cents));
                    adds += 1;
                }
                Op::Remove(index) => {
                    if store.remove_item(index).is_some() {
                        removed += 1;
                    }
                }
            }
        }

        prop_assert_eq!(store.count(), adds - removed);
    }

    #[test]
    fn removing_one_index_keeps_relative_order(
        len in 1usize..24,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = MenuStore::new();
        for n in 0..len {
            store.add_item(Course::Main, format!("dish-{n}"), Price::from_major(n as u64));
        }
        let index = pick.index(len);
        let mut expected: Vec<DishRecord> = store.items().to_vec();
        expected.remove(index);

        store.remove_item(index).expect("index in range");

        prop_assert_eq!(store.count(), len - 1);
        prop_assert_eq!(store.items(), expected.as_slice());
    }
}

#[test]
fn average_of_hundred_and_fifty_starters_is_seventy_five() {
    let mut store = MenuStore::new();
    store.add_item(Course::Starter, "", "R 100".parse().expect("price"));
    store.add_item(Course::Starter, "", "R 50".parse().expect("price"));

    assert_eq!(store.average_price(Course::Starter), 75.0);
    assert_eq!(store.average_price(Course::Main), 0.0);
}

#[test]
fn chef_dishes_reach_the_shared_menu() {
    let mut store = MenuStore::new();
    let mut form = ChefControlForm::new();

    form.name = "Soup".to_string();
    form.description = "Hot".to_string();
    form.price = "40".to_string();
    form.course = "starter".to_string();
    store.push(form.submit().expect("valid"));

    form.price = "12".to_string();
    assert_eq!(form.submit(), Err(MenuError::IncompleteForm));

    assert_eq!(store.count(), 1);
    assert_eq!(form.submitted().len(), 1);
    assert_eq!(store.items()[0].name.as_deref(), Some("Soup"));
    assert_eq!(store.average_price(Course::Starter), 40.0);
}

#[test]
fn showcase_adds_are_independent_of_the_showcase() {
    let mut demo = DemoMenu::new();
    let mut store = MenuStore::new();

    store.push(demo.slot(Course::Main).to_record());
    demo.seed();
    store.push(demo.slot(Course::Main).to_record());
    store.push(demo.slot(Course::Dessert).to_record());

    assert_eq!(store.count(), 3);
    assert_eq!(store.average_price(Course::Main), 75.0);

    store.remove_item(0).expect("remove unseeded main");
    assert_eq!(store.average_price(Course::Main), 150.0);
    assert!(demo.is_seeded(), "removing from the store never touches the showcase");
}
