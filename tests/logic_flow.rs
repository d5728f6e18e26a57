mod common;

use common::{descriptions, logic_with, typical_logic};
use guilttrip::config::Theme;
use guilttrip::errors::{CommandError, LogicError, ParseError};
use guilttrip::logic::commands::PanelName;
use guilttrip::model::{Amount, CategoryKind, ListKind};

#[test]
fn added_lunch_is_found_by_description() {
    let mut logic = logic_with(&["add t/expense c/Food d/Lunch a/5.60"]);
    let result = logic.execute("find d/Lunch").unwrap();
    assert_eq!(result.feedback, "1 entries listed!");

    let found = logic.displayed(ListKind::Entries);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].category().name(), "Food");
    assert_eq!(*found[0].amount(), Amount::from_cents(560));
}

#[test]
fn find_without_criteria_shows_everything() {
    let mut logic = typical_logic();
    logic.execute("find c/travel").unwrap();
    let result = logic.execute("find").unwrap();
    assert_eq!(result.feedback, "3 entries listed!");
}

#[test]
fn find_matches_category_names_with_spaces() {
    let mut logic = typical_logic();
    logic.execute("addCategory t/expense c/Eating Out").unwrap();
    logic
        .execute("add t/expense c/Eating Out d/Dinner a/10 date/2019-10-10")
        .unwrap();

    let result = logic.execute("find c/Eating Out").unwrap();
    assert_eq!(result.feedback, "1 entries listed!");
    assert_eq!(descriptions(&logic, ListKind::Entries), vec!["Dinner"]);

    logic.execute("find c/eating out, travel").unwrap();
    assert_eq!(
        descriptions(&logic, ListKind::Entries),
        vec!["Taxi home", "Dinner"]
    );
}

#[test]
fn find_combines_criteria_regardless_of_order() {
    let mut logic = typical_logic();
    logic.execute("add t/expense c/Food d/Dinner a/20 date/2019-10-12").unwrap();

    logic.execute("find c/food a/10").unwrap();
    let forward = descriptions(&logic, ListKind::Entries);
    logic.execute("find a/10 c/food").unwrap();
    let backward = descriptions(&logic, ListKind::Entries);

    assert_eq!(forward, vec!["Dinner"]);
    assert_eq!(forward, backward);
}

#[test]
fn find_by_month_and_tags() {
    let mut logic = typical_logic();
    logic.execute("add t/expense c/Food d/Brunch a/8 date/2019-11-02 tag/work").unwrap();

    logic.execute("find date/2019-10").unwrap();
    assert_eq!(
        descriptions(&logic, ListKind::Entries),
        vec!["Lunch", "Taxi home", "October pay"]
    );

    logic.execute("find tag/work").unwrap();
    assert_eq!(descriptions(&logic, ListKind::Entries), vec!["Lunch", "Brunch"]);
}

#[test]
fn list_clears_the_filter() {
    let mut logic = typical_logic();
    logic.execute("find c/travel").unwrap();
    assert_eq!(logic.displayed(ListKind::Entries).len(), 1);

    let result = logic.execute("list").unwrap();
    assert_eq!(result.panel, Some(PanelName::Entries));
    assert_eq!(logic.displayed(ListKind::Entries).len(), 3);
}

#[test]
fn empty_edit_is_rejected_before_the_model() {
    let mut logic = typical_logic();
    assert_eq!(
        logic.execute("edit 1"),
        Err(LogicError::Parse(ParseError::NotEdited))
    );
}

#[test]
fn edit_into_another_entry_is_a_duplicate() {
    let mut logic = typical_logic();
    let err = logic
        .execute("edit 2 c/Food d/Lunch a/5.60 date/2019-10-10 tag/work")
        .unwrap_err();
    assert_eq!(err, LogicError::Command(CommandError::DuplicateEntry));
    assert_eq!(
        descriptions(&logic, ListKind::Entries),
        vec!["Lunch", "Taxi home", "October pay"]
    );
}

#[test]
fn edit_to_itself_is_accepted() {
    let mut logic = typical_logic();
    let result = logic.execute("edit 1 d/Lunch a/5.60").unwrap();
    assert!(result.feedback.starts_with("Edited Entry: Lunch"));
    assert_eq!(logic.displayed(ListKind::Entries).len(), 3);
}

#[test]
fn edit_merges_fields_and_keeps_kind() {
    let mut logic = typical_logic();
    logic.execute("edit 2 a/15 c/food tag/").unwrap();

    let taxi = logic.displayed(ListKind::Entries)[1].clone();
    assert_eq!(taxi.description().as_str(), "Taxi home");
    assert_eq!(*taxi.amount(), Amount::from_cents(1500));
    assert_eq!(taxi.category().name(), "Food");
    assert_eq!(taxi.category().kind(), CategoryKind::Expense);
    assert!(taxi.tags().is_empty());
}

#[test]
fn edit_rejects_unknown_category() {
    let mut logic = typical_logic();
    assert_eq!(
        logic.execute("editIncome 1 c/Lottery"),
        Err(LogicError::Command(CommandError::UnknownCategory(
            "Lottery".into()
        )))
    );
}

#[test]
fn kind_views_index_their_own_rows() {
    let mut logic = typical_logic();
    logic.execute("editIncome 1 a/3500").unwrap();
    let pay = logic.displayed(ListKind::Incomes)[0].clone();
    assert_eq!(*pay.amount(), Amount::from_cents(350_000));

    assert_eq!(
        logic.execute("editIncome 2 a/1"),
        Err(LogicError::Command(CommandError::InvalidDisplayedIndex))
    );
}

#[test]
fn index_is_checked_against_the_current_view() {
    let mut logic = typical_logic();
    logic.execute("find c/travel").unwrap();
    assert_eq!(
        logic.execute("delete 2"),
        Err(LogicError::Command(CommandError::InvalidDisplayedIndex))
    );
    logic.execute("delete 1").unwrap();
    logic.execute("list").unwrap();
    assert_eq!(
        descriptions(&logic, ListKind::Entries),
        vec!["Lunch", "October pay"]
    );
}

#[test]
fn deleting_the_only_wish() {
    let mut logic = typical_logic();
    assert_eq!(
        logic.execute("deleteWish 2"),
        Err(LogicError::Command(CommandError::InvalidDisplayedIndex))
    );
    let result = logic.execute("deleteWish 1").unwrap();
    assert!(result.feedback.starts_with("Deleted Wish: Phone"));
    assert!(logic.displayed(ListKind::Wishes).is_empty());
}

#[test]
fn sort_is_undoable_on_its_own() {
    let mut logic = typical_logic();
    let result = logic.execute("sort type/amount seq/desc").unwrap();
    assert_eq!(result.feedback, "Sorted all entries by amount");
    assert_eq!(
        descriptions(&logic, ListKind::Entries),
        vec!["October pay", "Taxi home", "Lunch"]
    );

    logic.execute("undo").unwrap();
    assert_eq!(
        descriptions(&logic, ListKind::Entries),
        vec!["Lunch", "Taxi home", "October pay"]
    );
}

#[test]
fn undo_and_redo_report_empty_history() {
    let mut logic = logic_with(&[]);
    assert_eq!(
        logic.execute("undo"),
        Err(LogicError::Command(CommandError::NothingToUndo))
    );
    logic.execute("add t/expense c/Food d/Lunch a/5").unwrap();
    logic.execute("undo").unwrap();
    logic.execute("redo").unwrap();
    assert_eq!(
        logic.execute("redo"),
        Err(LogicError::Command(CommandError::NothingToRedo))
    );
}

#[test]
fn categories_must_exist_and_can_be_added() {
    let mut logic = logic_with(&[]);
    assert_eq!(
        logic.execute("add t/expense c/Pets d/Kibble a/30"),
        Err(LogicError::Command(CommandError::UnknownCategory("Pets".into())))
    );
    let result = logic.execute("addCategory t/expense c/Pets").unwrap();
    assert_eq!(result.feedback, "New expense category added: Pets");
    logic.execute("add t/expense c/pets d/Kibble a/30").unwrap();
    assert_eq!(
        logic.displayed(ListKind::Entries)[0].category().name(),
        "Pets"
    );
    assert_eq!(
        logic.execute("addCategory t/expense c/PETS"),
        Err(LogicError::Command(CommandError::DuplicateCategory(
            "PETS".into()
        )))
    );
}

#[test]
fn editing_one_of_two_identical_entries_into_itself_is_a_duplicate() {
    let mut logic = logic_with(&[
        "add t/expense c/Food d/Lunch a/5.60 date/2019-10-10",
        "add t/expense c/Food d/Lunch a/5.60 date/2019-10-10",
    ]);
    assert_eq!(logic.displayed(ListKind::Entries).len(), 2);
    assert_eq!(
        logic.execute("edit 1 a/5.60"),
        Err(LogicError::Command(CommandError::DuplicateEntry))
    );
    assert_eq!(
        logic.execute("edit 2 d/Lunch"),
        Err(LogicError::Command(CommandError::DuplicateEntry))
    );
    logic.execute("edit 1 a/6").unwrap();
    assert_eq!(logic.displayed(ListKind::Entries).len(), 2);
}

#[test]
fn delete_removes_several_entries_in_one_step() {
    let mut logic = typical_logic();
    let result = logic.execute("delete 1,3").unwrap();
    assert_eq!(
        result.feedback.lines().count(),
        2,
        "one line per deleted entry"
    );
    assert!(result.feedback.starts_with("Deleted Expense: Lunch"));
    assert_eq!(descriptions(&logic, ListKind::Entries), vec!["Taxi home"]);

    logic.execute("undo").unwrap();
    assert_eq!(logic.displayed(ListKind::Entries).len(), 3);
}

#[test]
fn delete_with_any_bad_index_removes_nothing() {
    let mut logic = typical_logic();
    assert_eq!(
        logic.execute("delete 1,9"),
        Err(LogicError::Command(CommandError::InvalidDisplayedIndex))
    );
    assert_eq!(logic.displayed(ListKind::Entries).len(), 3);
    assert!(matches!(
        logic.execute("delete 1,x"),
        Err(LogicError::Parse(ParseError::InvalidFormat { .. }))
    ));
}

#[test]
fn statistics_cover_a_range_of_months() {
    let mut logic = typical_logic();
    logic
        .execute("add t/expense c/Food d/September snack a/2 date/2019-09-15")
        .unwrap();
    logic
        .execute("add t/expense c/Food d/December feast a/50 date/2019-12-24")
        .unwrap();

    let result = logic.execute("viewTable p/2019-09,2019-11").unwrap();
    assert_eq!(
        result.feedback,
        "Showing statistics for September 2019 to November 2019"
    );
    assert_eq!(
        logic.statistics().unwrap().total_expense,
        Amount::from_cents(1960)
    );

    assert!(matches!(
        logic.execute("viewBarChart p/2019-11,2019-09"),
        Err(LogicError::Parse(ParseError::InvalidArgument { .. }))
    ));
}

#[test]
fn statistics_cover_the_requested_month() {
    let mut logic = typical_logic();
    let result = logic.execute("viewTable p/2019-10").unwrap();
    assert_eq!(result.panel, Some(PanelName::StatisticsTable));

    let statistics = logic.statistics().unwrap();
    assert_eq!(statistics.total_expense, Amount::from_cents(1760));
    assert_eq!(statistics.total_income, Amount::from_cents(300_000));

    logic.execute("viewBarChart p/11/2019").unwrap();
    assert!(logic.statistics().unwrap().total_expense.is_zero());
}

#[test]
fn theme_commands_only_return_hints() {
    let mut logic = typical_logic();
    let dark = logic.execute("setDarkTheme").unwrap();
    assert_eq!(dark.theme, Some(Theme::Dark));
    assert_eq!(dark.feedback, "Changed to dark theme");
    let light = logic.execute("setlighttheme").unwrap();
    assert_eq!(light.theme, Some(Theme::Light));
}

#[test]
fn history_lists_most_recent_first() {
    let mut logic = logic_with(&["list", "viewEntry"]);
    let result = logic.execute("history").unwrap();
    assert_eq!(
        result.feedback,
        "Entered commands (from most recent to earliest):\nhistory\nviewEntry\nlist"
    );
}

#[test]
fn help_and_exit_flags() {
    let mut logic = logic_with(&[]);
    assert!(logic.execute("help").unwrap().show_help);
    let usage = logic.execute("help sort").unwrap();
    assert!(usage.feedback.starts_with("sort:"));
    assert!(logic.execute("exit").unwrap().exit);
}
