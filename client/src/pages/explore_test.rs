use super::*;

#[test]
fn category_choices_start_with_all() {
    assert_eq!(CATEGORY_CHOICES[0].0, CategoryFilter::All);
    assert_eq!(choice_label(CategoryFilter::All), "All Categories");
}

#[test]
fn category_choice_ids_parse_back() {
    for (choice, _) in CATEGORY_CHOICES {
        assert_eq!(CategoryFilter::from_id(choice.id()), choice);
    }
}

#[test]
fn choice_label_uses_category_label() {
    assert_eq!(choice_label(CategoryFilter::Only(Category::Social)), "Social Issues");
}
