//! User interface rendering functions for the maze and the completion notice.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Clear,
    },
    Frame,
};

use crate::{
    level::{CellKind, Level},
    types::{Position, Screen, Status},
    App,
};

/// Color of wall cells.
const WALL_COLOR: Color = Color::Gray;
/// Color of the start cell.
const START_COLOR: Color = Color::Green;
/// Color of goal cells.
const GOAL_COLOR: Color = Color::Red;
/// Color of the player token.
const PLAYER_COLOR: Color = Color::Blue;

/// Updates the application UI based on the persistent state.
///
/// This function renders the in-game screen from the state stored in the [`App`] structure and, once
/// every level has been completed, the completion notice on top of it.
///
/// # Errors
///
/// This function may return errors from data conversion failures or if the game state points
/// outside of the level catalog.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);
    in_game(app, frame)?;

    if app.screen == Screen::AllComplete {
        completion_notice(frame);
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the in-game screen with the level name, the maze and the status line.
///
/// This function lays out a header naming the current level, the maze centered in the remaining
/// space and a status line that either explains the controls or announces the level as complete.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations or if the current level
/// cannot be retrieved.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    let level = app.game.level()?;
    let state = app.game.state();

    let block = Block::bordered()
        .title("Maze Game")
        .title_bottom("(arrows / hjkl) move / (r) reset / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(frame.area());
    frame.render_widget(block, frame.area());

    let [header, maze_area, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner_space);

    let title = format!(
        "Level: {} ({}/{})",
        level.name(),
        state.level_index.saturating_add(1),
        app.game.level_count()
    );
    frame.render_widget(Line::raw(title).centered(), header);

    maze(level, state.player, frame, maze_area)?;

    let status_line = match app.game.status() {
        Status::Won if app.game.is_last_level() => {
            Line::raw("Level Complete! (n) finish").style(won_style())
        }
        Status::Won => Line::raw("Level Complete! (n) next level").style(won_style()),
        Status::Playing => {
            Line::raw("Move the player (blue) to the goal (red).").style(Color::Green)
        }
    };
    frame.render_widget(status_line.centered(), status);

    Ok(())
}

/// Renders the maze grid and the player token centered inside `area`.
///
/// This function draws walls, the start cell, goal cells and the player token as points on a
/// [`Canvas`] of one terminal cell per grid cell. Path cells are left blank. When `area` cannot fit
/// the grid, a notice asking for a larger terminal is drawn instead.
///
/// # Errors
///
/// This function may return errors if the level does not fit in the terminal's coordinate range.
pub(crate) fn maze(level: &Level, player: Position, frame: &mut Frame, area: Rect) -> Result<()> {
    let rows = u16::try_from(level.rows())?;
    let columns = u16::try_from(level.columns())?;

    if rows > area.height || columns > area.width {
        let notice = format!(
            "Terminal too small: the maze needs {columns}x{rows} cells, {}x{} available.",
            area.width, area.height
        );
        let [line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Line::raw(notice).style(Color::Yellow).centered(), line);
        return Ok(());
    }

    let [space] = Layout::vertical([Constraint::Length(rows)])
        .flex(Flex::Center)
        .areas(area);
    let [space] = Layout::horizontal([Constraint::Length(columns)])
        .flex(Flex::Center)
        .areas(space);

    // Pre-compute screen coordinates to handle errors before closures
    let mut walls = Vec::new();
    let mut starts = Vec::new();
    let mut goals = Vec::new();
    for (position, kind) in level.cells() {
        match kind {
            CellKind::Wall => walls.push(position),
            CellKind::Start => starts.push(position),
            CellKind::Goal => goals.push(position),
            CellKind::Path => {}
        }
    }
    let wall_coords = to_canvas_coords(&walls, rows, columns)?;
    let start_coords = to_canvas_coords(&starts, rows, columns)?;
    let goal_coords = to_canvas_coords(&goals, rows, columns)?;
    let player_coords = to_canvas_coords(&[player], rows, columns)?;

    let x_extent = half_extent(columns);
    let y_extent = half_extent(rows);
    let canvas = Canvas::default()
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-y_extent, y_extent])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_coords,
                color: WALL_COLOR,
            });
            ctx.draw(&Points {
                coords: &start_coords,
                color: START_COLOR,
            });
            ctx.draw(&Points {
                coords: &goal_coords,
                color: GOAL_COLOR,
            });
            // The token goes on its own layer so it covers the start and goal cells
            ctx.layer();
            ctx.draw(&Points {
                coords: &player_coords,
                color: PLAYER_COLOR,
            });
        });

    frame.render_widget(canvas, space);

    Ok(())
}

/// Renders the notice shown once every level has been completed.
///
/// This function draws a bordered popup in the middle of the frame, clearing whatever lies beneath
/// it, and tells the user how to start over or leave.
#[expect(
    clippy::indexing_slicing,
    reason = "The layout is created in-place with two known elements; there is no risk of bad indexing."
)]
#[expect(
    clippy::missing_asserts_for_indexing,
    reason = "The layout is created in-place with two known elements; there is no risk of bad indexing."
)]
pub(crate) fn completion_notice(frame: &mut Frame) {
    let [area] = Layout::vertical([Constraint::Length(4)])
        .flex(Flex::Center)
        .areas(frame.area());
    let [area] = Layout::horizontal([Constraint::Length(50)])
        .flex(Flex::Center)
        .areas(area);

    let block = Block::bordered()
        .title("All levels complete")
        .title_bottom("(n) play again / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);
    let inner_space = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let inner_layout = Layout::vertical([Constraint::Max(1); 2]).split(inner_space);
    frame.render_widget(
        Line::raw("Congratulations!").style(won_style()).centered(),
        inner_layout[0],
    );
    frame.render_widget(
        Line::raw("You've completed all levels!").centered(),
        inner_layout[1],
    );
}

/// Style used to announce a completed level.
fn won_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// Returns the distance from the center of a canvas axis to its outermost cell.
///
/// A single-cell axis still gets a non-zero extent since the canvas ignores empty bounds.
fn half_extent(cells: u16) -> f64 {
    (f64::from(cells) - 1.).max(1.) / 2.
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts grid positions to canvas points centered on the maze. A column `x` maps
/// to `x - (columns - 1) / 2`. A row `y` maps to `(rows - 1) / 2 - y`, since the canvas `y` axis
/// points upwards while grid rows grow downwards.
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn to_canvas_coords(
    positions: &[Position],
    rows: u16,
    columns: u16,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(rows);
    let cols_n = f64::from(columns);

    positions
        .iter()
        .map(|position| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(position.y)?);
            let screen_x = f64::from(u16::try_from(position.x)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}
