/**
 * File: /src/object.rs
 * Created Date: Monday, October 12th 2026
 * Author: Zihan
 * -----
 * Last Modified: Monday, 12th October 2026 3:02:44 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 */
use serde::{Deserialize, Serialize};
use std::fmt;

/// An identified point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl Object {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// # Example
/// ```
/// use nn_cluster::Object;
/// assert_eq!(Object::new(4, 1.0, 12.5).to_string(), "4[1,12.5]");
/// ```
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.id, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_shortest_form() {
        assert_eq!(Object::new(1, 0.0, 0.0).to_string(), "1[0,0]");
        assert_eq!(Object::new(40, 1000.0, 7.0).to_string(), "40[1000,7]");
    }
}
