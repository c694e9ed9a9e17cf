// SPDX-License-Identifier: MIT OR Apache-2.0
use vello::peniko::Color;

/// Scale the alpha channel of a color by `factor`.
pub fn fade(color: Color, factor: f32) -> Color {
    color.multiply_alpha(factor.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade() {
        let faded = fade(Color::from_rgb8(255, 0, 0), 0.35);
        assert!((faded.components[3] - 0.35).abs() < 1e-6);
    }
}
