use crate::core::math::Vec2;

/// Collision/render geometry in local space
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Regular polygon inscribed in a circle of `radius`
    Polygon {
        sides: u32,
        radius: f32,
        vertices: Vec<Vec2>,
    },
}

impl Shape {
    pub fn circle(radius: f32) -> Self {
        Shape::Circle { radius }
    }

    /// Regular polygon with the first vertex half a segment off the x axis,
    /// so squares come out axis aligned.
    pub fn regular_polygon(sides: u32, radius: f32) -> Self {
        let sides = sides.max(3);
        let theta = std::f32::consts::TAU / sides as f32;
        let offset = theta * 0.5;
        let vertices = (0..sides)
            .map(|i| {
                let a = offset + theta * i as f32;
                Vec2::new(radius * a.cos(), radius * a.sin())
            })
            .collect();
        Shape::Polygon { sides, radius, vertices }
    }

    /// Radius of the smallest origin-centred circle enclosing the shape
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Shape::Circle { radius } => *radius,
            Shape::Polygon { radius, .. } => *radius,
        }
    }

    pub fn area(&self) -> f32 {
        match self {
            Shape::Circle { radius } => std::f32::consts::PI * radius * radius,
            Shape::Polygon { vertices, .. } => {
                // Shoelace over the closed loop
                let n = vertices.len();
                let twice: f32 = (0..n)
                    .map(|i| vertices[i].cross(vertices[(i + 1) % n]))
                    .sum();
                twice.abs() * 0.5
            }
        }
    }
}
