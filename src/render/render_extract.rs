use crate::core::math::Vec2;
use crate::domain::Viewport;
use crate::simulation::World;
use crate::systems::body::Shape;

/// Render surface settings
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// CSS colour, or "transparent" to only clear
    pub background: String,
    /// Stroke outlines instead of filling
    pub wireframes: bool,
}

impl RenderOptions {
    pub fn new(viewport: Viewport, background: String) -> Self {
        Self {
            width: viewport.width.max(0.0) as u32,
            height: viewport.height.max(0.0) as u32,
            background,
            wireframes: false,
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.width = viewport.width.max(0.0) as u32;
        self.height = viewport.height.max(0.0) as u32;
    }

    pub fn is_transparent(&self) -> bool {
        self.background.eq_ignore_ascii_case("transparent")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeCommand {
    Circle {
        center: Vec2,
        radius: f32,
        fill: String,
    },
    Polygon {
        points: Vec<Vec2>,
        fill: String,
    },
}

/// Everything needed to paint one frame, in draw order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderFrame {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub wireframes: bool,
    pub shapes: Vec<ShapeCommand>,
}

/// Snapshot `world` into `out`, reusing its allocation
pub fn extract_frame(world: &World, options: &RenderOptions, out: &mut RenderFrame) {
    out.width = options.width;
    out.height = options.height;
    out.wireframes = options.wireframes;
    if out.background != options.background {
        out.background.clone_from(&options.background);
    }
    out.shapes.clear();
    out.shapes.reserve(world.body_count());

    for body in world.bodies() {
        let command = match &body.shape {
            Shape::Circle { radius } => ShapeCommand::Circle {
                center: body.position,
                radius: *radius,
                fill: body.fill.clone(),
            },
            Shape::Polygon { .. } => ShapeCommand::Polygon {
                points: body.world_vertices(),
                fill: body.fill.clone(),
            },
        };
        out.shapes.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::body::{Body, BodyOptions};

    #[test]
    fn one_command_per_body_in_insertion_order() {
        let mut world = World::new(Vec2::ZERO);
        world.add(Body::circle(10.0, 20.0, 5.0, BodyOptions::default().fill("#000")));
        world.add(Body::polygon(50.0, 50.0, 4, 10.0, BodyOptions::default().fill("#444")));

        let options = RenderOptions::new(Viewport::new(320.0, 200.0), "transparent".to_string());
        let mut frame = RenderFrame::default();
        extract_frame(&world, &options, &mut frame);

        assert_eq!(frame.width, 320);
        assert_eq!(frame.height, 200);
        assert_eq!(frame.shapes.len(), 2);
        assert_eq!(
            frame.shapes[0],
            ShapeCommand::Circle {
                center: Vec2::new(10.0, 20.0),
                radius: 5.0,
                fill: "#000".to_string(),
            }
        );
        match &frame.shapes[1] {
            ShapeCommand::Polygon { points, fill } => {
                assert_eq!(points.len(), 4);
                assert_eq!(fill, "#444");
                for p in points {
                    assert!((p.distance(Vec2::new(50.0, 50.0)) - 10.0).abs() < 1e-3);
                }
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn reextracting_replaces_previous_shapes() {
        let mut world = World::new(Vec2::ZERO);
        world.add(Body::circle(0.0, 0.0, 1.0, BodyOptions::default()));
        let options = RenderOptions::new(Viewport::new(10.0, 10.0), "#fff".to_string());
        let mut frame = RenderFrame::default();

        extract_frame(&world, &options, &mut frame);
        extract_frame(&world, &options, &mut frame);

        assert_eq!(frame.shapes.len(), 1);
        assert_eq!(frame.background, "#fff");
        assert!(!options.is_transparent());
    }
}
