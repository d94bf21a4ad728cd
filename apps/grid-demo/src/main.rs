use anyhow::Context;
use cranpose_grid::prelude::*;
use std::io::{self, Write};

/// Character cell the preview is drawn with, in layout pixels.
const CELL_WIDTH: f32 = 8.0;
const CELL_HEIGHT: f32 = 16.0;

#[derive(Clone, Debug)]
struct Label(String);

impl MeasureItem for Label {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            CELL_WIDTH * self.0.chars().count() as f32,
            CELL_HEIGHT,
        ))
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let grid = GridLayout::new(
        1..=10,
        GridSpec::new(3)
            .columns_in_landscape(5)
            .spacing(Dp(8.0))
            .scrollable(false),
        |n: &i32| Label(n.to_string()),
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for viewport in [Size::new(312.0, 480.0), Size::new(520.0, 240.0)] {
        let orientation = Orientation::from_size(viewport);
        let metrics = grid.metrics(orientation);
        log::info!(
            "{:?}: {} columns, {} rows",
            orientation,
            metrics.active_columns(),
            metrics.row_count()
        );

        let root = grid.render(orientation);
        let layout = measure(&root, viewport, 1.0);
        let scene = HeadlessRenderer::new().render(&layout);

        writeln!(out, "=== {orientation:?} {}x{} ===", viewport.width, viewport.height)
            .context("writing preview header")?;
        for line in draw(&scene, &root, viewport) {
            writeln!(out, "{line}").context("writing preview")?;
        }
        writeln!(out).context("writing preview")?;
    }
    Ok(())
}

/// Rasterizes the scene onto a character canvas: `[label]` for items,
/// `.` for empty slots.
fn draw(scene: &Scene, root: &GridNode<Label>, viewport: Size) -> Vec<String> {
    let columns = (viewport.width / CELL_WIDTH) as usize;
    let rows = (viewport.height / CELL_HEIGHT) as usize;
    let mut canvas = vec![vec![' '; columns]; rows];
    let labels = root.items();

    for op in scene.operations() {
        let (rect, fill, text) = match op {
            RenderOp::Item { flat_index, rect } => {
                let text = labels
                    .iter()
                    .find(|(index, _)| index == flat_index)
                    .map(|(_, label)| label.0.as_str())
                    .unwrap_or("?");
                (rect, '-', text)
            }
            RenderOp::Placeholder { rect, .. } => (rect, '.', ""),
            RenderOp::ScrollIndicator { rect } => (rect, '|', ""),
        };
        let left = (rect.x / CELL_WIDTH) as usize;
        let right = ((rect.right() / CELL_WIDTH) as usize).min(columns);
        let row = (rect.y / CELL_HEIGHT) as usize;
        let Some(line) = canvas.get_mut(row) else {
            continue;
        };
        for cell in line.iter_mut().take(right).skip(left) {
            *cell = fill;
        }
        let start = left + (right.saturating_sub(left)).saturating_sub(text.len()) / 2;
        for (offset, ch) in text.chars().enumerate() {
            if let Some(cell) = line.get_mut(start + offset) {
                *cell = ch;
            }
        }
    }

    canvas
        .into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}
