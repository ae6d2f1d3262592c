//! Parsing functions for command-line values.

use chromapick_core::ClickPoint;

/// Parse a display-space point in format "X,Y"
///
/// # Arguments
/// * `point_str` - A string in format "X,Y" with integer coordinates
///
/// # Returns
/// A [`ClickPoint`] with the parsed coordinates
pub fn parse_point(point_str: &str) -> Result<ClickPoint, String> {
    let parts: Vec<&str> = point_str.split(',').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Point must be in format X,Y (e.g., 120,45), got: {}",
            point_str
        ));
    }

    let x = parts[0]
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("Invalid x coordinate: {}", parts[0]))?;
    let y = parts[1]
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("Invalid y coordinate: {}", parts[1]))?;

    Ok(ClickPoint::new(x, y))
}
