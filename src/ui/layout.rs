//! Screen layout shared by rendering and mouse hit-testing.
//!
//! [`place`] assigns every element of a [`UIViewModel`] to a terminal row.
//! The renderer draws exactly these placements and [`hit_test`] reads them
//! back, so a click always lands on what was drawn at that row.
//!
//! ```text
//! row 1      (blank)
//! row 2      Header
//! row 3      Border
//! rows 4-6   SearchBar
//! row 7..    ResultsHeading + ResultRow* | NothingFound
//!            (blank)
//!            PinnedHeading + PinnedRow*
//! rows-1     Border
//! rows       Footer
//! ```
//!
//! Anything that would reach the bottom border is left out, so a pane that
//! is too short loses trailing rows instead of printing past its last line.

use crate::domain::PinId;
use crate::panels::EntryId;
use crate::ui::viewmodel::{ResultsView, UIViewModel};

/// Rows taken above the results list (blank, header, border, search box).
pub const TOP_CHROME_ROWS: usize = 6;

/// Rows taken by the bottom border and footer.
pub const BOTTOM_CHROME_ROWS: usize = 2;

/// Rows taken by the gap and heading above pinned blocks.
pub const PINNED_HEADING_ROWS: usize = 2;

/// Removal control printed at the start of every pinned row.
pub const REMOVE_CONTROL: &str = "[x]";

/// What occupies a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Header,
    Border,
    /// First of the three search box rows.
    SearchBar,
    ResultsHeading,
    /// Index into `ResultsView::Rows`.
    ResultRow(usize),
    NothingFound,
    PinnedHeading,
    /// Index into `PinnedView::rows`.
    PinnedRow(usize),
    Footer,
}

/// A slot anchored at a 1-indexed terminal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub slot: Slot,
}

/// What a click lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A results entry; clicking promotes it.
    Result(EntryId),
    /// A pinned block outside its removal control; clicking selects it.
    Pin(PinId),
    /// A pinned block's removal control.
    RemovePin(PinId),
    /// Anything else: headings, the "nothing found" line, empty space.
    Nothing,
}

/// Rows used by the results list, heading included.
#[must_use]
pub fn results_rows(results: Option<&ResultsView>) -> usize {
    match results {
        None => 0,
        Some(ResultsView::NothingFound(_)) => 1,
        Some(ResultsView::Rows(rows)) => 1 + rows.len(),
    }
}

/// Lays out `vm` on a terminal `rows` high.
#[must_use]
pub fn place(vm: &UIViewModel, rows: usize) -> Vec<Placement> {
    let mut placements = vec![
        Placement { row: 2, slot: Slot::Header },
        Placement { row: 3, slot: Slot::Border },
        Placement { row: 4, slot: Slot::SearchBar },
    ];
    let mut next = TOP_CHROME_ROWS + 1;

    match &vm.results {
        None => {}
        Some(ResultsView::NothingFound(_)) => {
            placements.push(Placement { row: next, slot: Slot::NothingFound });
            next += 1;
        }
        Some(ResultsView::Rows(result_rows)) => {
            placements.push(Placement { row: next, slot: Slot::ResultsHeading });
            next += 1;
            for index in 0..result_rows.len() {
                placements.push(Placement { row: next, slot: Slot::ResultRow(index) });
                next += 1;
            }
        }
    }

    if let Some(pinned) = &vm.pinned {
        next += 1;
        placements.push(Placement { row: next, slot: Slot::PinnedHeading });
        next += 1;
        for index in 0..pinned.rows.len() {
            placements.push(Placement { row: next, slot: Slot::PinnedRow(index) });
            next += 1;
        }
    }

    // the bottom chrome always sits on the last two rows; anything that
    // would reach into it is not drawn
    let footer_row = rows.max(BOTTOM_CHROME_ROWS);
    let border_row = footer_row - 1;
    placements.retain(|p| p.row + p.slot.height() <= border_row);
    placements.push(Placement { row: border_row, slot: Slot::Border });
    placements.push(Placement { row: footer_row, slot: Slot::Footer });

    placements
}

impl Slot {
    /// Rows the slot occupies, starting at its placement row.
    #[must_use]
    pub const fn height(self) -> usize {
        match self {
            Self::SearchBar => 3,
            _ => 1,
        }
    }
}

/// Resolves a click at 0-indexed pane `line`/`column`.
#[must_use]
pub fn hit_test(vm: &UIViewModel, rows: usize, line: usize, column: usize) -> ClickTarget {
    let row = line + 1;
    let Some(placement) = place(vm, rows).into_iter().find(|p| p.row == row) else {
        return ClickTarget::Nothing;
    };

    match placement.slot {
        Slot::ResultRow(index) => match &vm.results {
            Some(ResultsView::Rows(result_rows)) => result_rows
                .get(index)
                .map_or(ClickTarget::Nothing, |r| ClickTarget::Result(r.id)),
            _ => ClickTarget::Nothing,
        },
        Slot::PinnedRow(index) => vm
            .pinned
            .as_ref()
            .and_then(|pinned| pinned.rows.get(index))
            .map_or(ClickTarget::Nothing, |r| {
                if column < REMOVE_CONTROL.len() {
                    ClickTarget::RemovePin(r.id)
                } else {
                    ClickTarget::Pin(r.id)
                }
            }),
        _ => ClickTarget::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::*;

    fn vm(results: Option<ResultsView>, pins: usize) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo { title: String::new(), loading: false },
            search_bar: SearchBarInfo { query: String::new() },
            results,
            pinned: (pins > 0).then(|| PinnedView {
                title: String::new(),
                rows: (0..pins)
                    .map(|i| PinnedRow {
                        id: PinId(i as u64 + 10),
                        summary: String::new(),
                        age: String::new(),
                        is_selected: false,
                    })
                    .collect(),
            }),
            footer: FooterInfo { keybindings: String::new() },
        }
    }

    fn rows(n: usize) -> ResultsView {
        ResultsView::Rows(
            (0..n)
                .map(|i| ResultRow {
                    id: EntryId(i as u64),
                    name: format!("repo{i}"),
                    owner: String::new(),
                    stars: String::new(),
                    is_selected: false,
                    highlight_ranges: vec![],
                })
                .collect(),
        )
    }

    #[test]
    fn result_rows_follow_heading() {
        let placements = place(&vm(Some(rows(3)), 0), 24);
        assert!(placements.contains(&Placement { row: 7, slot: Slot::ResultsHeading }));
        assert!(placements.contains(&Placement { row: 8, slot: Slot::ResultRow(0) }));
        assert!(placements.contains(&Placement { row: 10, slot: Slot::ResultRow(2) }));
        assert!(placements.contains(&Placement { row: 24, slot: Slot::Footer }));
    }

    #[test]
    fn click_on_second_result() {
        let model = vm(Some(rows(3)), 0);
        // row 9 is 0-indexed line 8
        assert_eq!(hit_test(&model, 24, 8, 5), ClickTarget::Result(EntryId(1)));
    }

    #[test]
    fn click_on_nothing_found_or_heading_does_nothing() {
        let empty = vm(Some(ResultsView::NothingFound(EmptyState { message: String::new() })), 0);
        assert_eq!(hit_test(&empty, 24, 6, 3), ClickTarget::Nothing);

        let model = vm(Some(rows(2)), 0);
        assert_eq!(hit_test(&model, 24, 6, 3), ClickTarget::Nothing);
        assert_eq!(hit_test(&model, 24, 15, 3), ClickTarget::Nothing);
    }

    #[test]
    fn pinned_rows_split_removal_control() {
        let model = vm(Some(rows(2)), 2);
        // results: heading 7, rows 8-9; gap 10; pinned heading 11; pins 12-13
        assert_eq!(hit_test(&model, 24, 11, 0), ClickTarget::RemovePin(PinId(10)));
        assert_eq!(hit_test(&model, 24, 12, 2), ClickTarget::RemovePin(PinId(11)));
        assert_eq!(hit_test(&model, 24, 12, 10), ClickTarget::Pin(PinId(11)));
        assert_eq!(hit_test(&model, 24, 10, 0), ClickTarget::Nothing);
    }

    #[test]
    fn short_pane_keeps_everything_on_screen() {
        let model = vm(Some(rows(5)), 1);
        let placements = place(&model, 12);

        assert!(placements.iter().all(|p| p.row + p.slot.height() - 1 <= 12));
        assert!(placements.contains(&Placement { row: 11, slot: Slot::Border }));
        assert!(placements.contains(&Placement { row: 12, slot: Slot::Footer }));
        assert!(!placements.iter().any(|p| p.slot == Slot::PinnedRow(0)));
        assert_eq!(hit_test(&model, 12, 14, 0), ClickTarget::Nothing);
    }

    #[test]
    fn pinned_area_moves_up_without_results() {
        let model = vm(None, 1);
        let placements = place(&model, 24);
        assert!(placements.contains(&Placement { row: 8, slot: Slot::PinnedHeading }));
        assert!(placements.contains(&Placement { row: 9, slot: Slot::PinnedRow(0) }));
    }
}
