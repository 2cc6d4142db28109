//! Command-line description of a body: `TAG:ID:MASS:X,Y:VX,VY:DIMS`
//!
//! `DIMS` is a comma-separated list read by the shape tag, e.g.
//! `S:1:1:0,-50:0,0:40` or `R:2:3.5:100,100:2,0:50,30`.

use rigidsim_core::{ObjectId, Shape, Vector2D, World};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectArg {
    pub id: ObjectId,
    pub mass: f64,
    pub pos: Vector2D,
    pub vel: Vector2D,
    pub shape: Shape,
}

impl ObjectArg {
    pub fn insert_into(&self, world: &mut World) -> Result<(), rigidsim_core::SimError> {
        world.add_object(self.id, self.mass, self.pos, self.vel, self.shape)
    }
}

impl FromStr for ObjectArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 6 {
            return Err(format!(
                "expected TAG:ID:MASS:X,Y:VX,VY:DIMS, got '{}'",
                s
            ));
        }

        let mut tag_chars = parts[0].trim().chars();
        let tag = match (tag_chars.next(), tag_chars.next()) {
            (Some(c), None) => c,
            _ => return Err(format!("shape tag must be one character, got '{}'", parts[0])),
        };
        let id = parts[1]
            .trim()
            .parse::<ObjectId>()
            .map_err(|e| format!("bad id '{}': {}", parts[1], e))?;
        let mass = parse_number(parts[2], "mass")?;
        let pos = parse_pair(parts[3], "position")?;
        let vel = parse_pair(parts[4], "velocity")?;
        let dims = parts[5]
            .split(',')
            .map(|d| parse_number(d, "dimension"))
            .collect::<Result<Vec<_>, _>>()?;
        let shape = Shape::from_tag(tag, &dims).map_err(|e| e.to_string())?;

        Ok(ObjectArg {
            id,
            mass,
            pos,
            vel,
            shape,
        })
    }
}

fn parse_number(s: &str, what: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .map_err(|e| format!("bad {} '{}': {}", what, s, e))
}

fn parse_pair(s: &str, what: &str) -> Result<Vector2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("{} must be X,Y, got '{}'", what, s))?;
    Ok(Vector2D::new(parse_number(x, what)?, parse_number(y, what)?))
}
