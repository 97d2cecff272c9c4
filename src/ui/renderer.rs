//! Top-level rendering coordinator.
//!
//! 1. **View Model Computation**: `AppState` becomes a [`UIViewModel`]
//! 2. **Layout**: [`layout::place`] assigns every element a row
//! 3. **Component Rendering**: each placement is drawn into one frame buffer
//!
//! The frame is printed in a single write; Zellij clears the pane before each
//! render call.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    print!("{}", render_frame(&viewmodel, &state.theme, rows, cols));
}

/// Renders `vm` into an ANSI frame.
#[must_use]
pub fn render_frame(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    for placement in layout::place(vm, rows) {
        components::render_placement(&mut out, vm, placement, theme, cols);
    }
    out
}
