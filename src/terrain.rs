// Height-field generator: two "islands" sampled from the same noise source,
// the taller one wins at each cell.

use crate::error::Error;
use crate::noise::NoiseSource;
use crate::types::HeightField;

/// Fill a `width` x `height` grid from `noise`, with coordinates divided by `scale`.
///
/// The left island is centred on the left third of the grid, the right island on
/// the right two-thirds. With [`crate::noise::UniformNoise`] the offsets change
/// nothing visible; with [`crate::noise::ValueNoise`] they place two blobs.
pub fn generate<N>(width: usize, height: usize, scale: f64, noise: &mut N) -> Result<HeightField, Error>
where
    N: NoiseSource + ?Sized,
{
    if width == 0 || height == 0 {
        return Err(Error::InvalidGrid { width, height });
    }
    if !scale.is_finite() || scale <= 0.0 {
        return Err(Error::InvalidScale(scale));
    }

    let left_center = width as f64 / 3.0;
    let right_center = 2.0 * width as f64 / 3.0;

    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        let ny = y as f64 / scale;
        for x in 0..width {
            let left = noise.sample((x as f64 - left_center) / scale, ny);
            let right = noise.sample((x as f64 - right_center) / scale, ny);
            cells.push(left.max(right));
        }
    }

    Ok(HeightField::from_cells(width, height, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{UniformNoise, ValueNoise};

    /// Records every coordinate it was asked for and answers with a fixed value.
    struct Probe {
        calls: Vec<(f64, f64)>,
        value: f64,
    }

    impl NoiseSource for Probe {
        fn sample(&mut self, x: f64, y: f64) -> f64 {
            self.calls.push((x, y));
            self.value
        }
    }

    #[test]
    fn test_generate_heights_in_unit_range() {
        let mut noise = UniformNoise::new(42);
        let field = generate(160, 120, 50.0, &mut noise).unwrap();

        assert_eq!(field.width(), 160);
        assert_eq!(field.height(), 120);
        for row in 0..field.height() {
            for col in 0..field.width() {
                let h = field.get(row, col).unwrap();
                assert!((0.0..1.0).contains(&h), "({row}, {col}) = {h}");
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let a = generate(16, 8, 50.0, &mut UniformNoise::new(9)).unwrap();
        let b = generate(16, 8, 50.0, &mut UniformNoise::new(9)).unwrap();
        let c = generate(16, 8, 50.0, &mut UniformNoise::new(10)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generate_samples_two_islands_per_cell() {
        let mut probe = Probe { calls: Vec::new(), value: 0.25 };
        let field = generate(3, 2, 2.0, &mut probe).unwrap();

        assert_eq!(probe.calls.len(), 3 * 2 * 2);
        // Cell (x=0, y=1): left island offset by width/3, right by 2*width/3.
        assert_eq!(probe.calls[6], ((0.0 - 1.0) / 2.0, 0.5));
        assert_eq!(probe.calls[7], ((0.0 - 2.0) / 2.0, 0.5));
        assert!(field.iter().all(|(_, _, h)| h == 0.25));
    }

    #[test]
    fn test_generate_takes_max_of_islands() {
        struct Alternating(bool);
        impl NoiseSource for Alternating {
            fn sample(&mut self, _x: f64, _y: f64) -> f64 {
                self.0 = !self.0;
                if self.0 { 0.2 } else { 0.7 }
            }
        }

        let field = generate(4, 4, 50.0, &mut Alternating(false)).unwrap();
        assert!(field.iter().all(|(_, _, h)| h == 0.7));
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        let mut noise = UniformNoise::new(1);
        assert!(matches!(
            generate(0, 4, 50.0, &mut noise),
            Err(Error::InvalidGrid { width: 0, height: 4 })
        ));
        assert!(matches!(generate(4, 4, 0.0, &mut noise), Err(Error::InvalidScale(_))));
        assert!(matches!(generate(4, 4, f64::NAN, &mut noise), Err(Error::InvalidScale(_))));
    }

    #[test]
    fn test_value_noise_islands_are_smooth() {
        let mut noise = ValueNoise::new(5);
        let field = generate(160, 120, 50.0, &mut noise).unwrap();

        // Adjacent cells are 1/50 apart in noise space, so they barely differ.
        for row in 0..field.height() {
            for col in 1..field.width() {
                let a = field.get(row, col - 1).unwrap();
                let b = field.get(row, col).unwrap();
                assert!((a - b).abs() < 0.1);
            }
        }
    }
}
