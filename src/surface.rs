use crate::style::Style;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangular drawing target.
///
/// Edges are always layered beneath nodes, whatever order they are issued in.
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Straight line between two node centers.
    fn draw_edge(&mut self, from: Point, to: Point, style: &Style);

    /// Filled, outlined circle with `label` centered on it.
    fn draw_node(&mut self, center: Point, radius: f64, label: &str, style: &Style);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Edge { from: Point, to: Point },
    Node { center: Point, radius: f64, label: String },
}

/// Surface that only remembers what was asked of it.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn node_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Node { .. }))
            .count()
    }

    pub fn edge_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Edge { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_edge(&mut self, from: Point, to: Point, _style: &Style) {
        self.commands.push(DrawCommand::Edge { from, to });
    }

    fn draw_node(&mut self, center: Point, radius: f64, label: &str, _style: &Style) {
        self.commands.push(DrawCommand::Node {
            center,
            radius,
            label: label.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_drops_earlier_commands() {
        let style = Style::default();
        let mut surface = RecordingSurface::new(100.0, 100.0);
        surface.draw_node(Point::new(1.0, 1.0), 5.0, "1", &style);
        surface.draw_edge(Point::new(1.0, 1.0), Point::new(2.0, 2.0), &style);
        assert_eq!(surface.node_count(), 1);
        assert_eq!(surface.edge_count(), 1);

        surface.clear();
        assert_eq!(surface.commands(), &[DrawCommand::Clear]);
        assert_eq!(surface.node_count(), 0);
        assert_eq!(surface.edge_count(), 0);
    }
}
