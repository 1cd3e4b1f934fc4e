use rayon::prelude::*;
use progressive_common::gpu_buffer::PixelBuffer;
use progressive_common::Result;

/// Running average of the frames rendered since the view last changed.
pub struct Accumulator {
    converged: PixelBuffer,
    samples: u32,
}

impl Accumulator {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self { converged: PixelBuffer::new(width, height)?, samples: 0 })
    }

    /// Blends `frame` in with weight 1 / (samples + 1), so after n frames the
    /// buffer holds their mean.
    pub fn blend(&mut self, frame: &PixelBuffer) {
        debug_assert_eq!(frame.size(), self.converged.size());
        let alpha = 1.0 / (self.samples as f32 + 1.0);

        self.converged.pixels_mut()
            .par_iter_mut()
            .zip(frame.pixels().par_iter())
            .for_each(|(acc, new)| {
                for c in 0..4 {
                    acc[c] += (new[c] - acc[c]) * alpha;
                }
            });
        self.samples += 1;
    }

    pub fn reset(&mut self) {
        self.converged.clear();
        self.samples = 0;
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.converged = PixelBuffer::new(width, height)?;
        self.samples = 0;
        Ok(())
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn image(&self) -> &PixelBuffer {
        &self.converged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(value: [f32; 4]) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(2, 2).unwrap();
        buffer.pixels_mut().fill(value);
        buffer
    }

    #[test]
    fn first_frame_replaces_history() {
        let mut acc = Accumulator::new(2, 2).unwrap();
        acc.blend(&frame([0.5, 0.25, 1.0, 1.0]));
        assert_eq!(acc.samples(), 1);
        assert_eq!(acc.image().get(1, 1), [0.5, 0.25, 1.0, 1.0]);
    }

    #[test]
    fn holds_the_mean_of_blended_frames() {
        let mut acc = Accumulator::new(2, 2).unwrap();
        acc.blend(&frame([1.0, 0.0, 0.0, 1.0]));
        acc.blend(&frame([0.0, 1.0, 0.0, 1.0]));
        assert_eq!(acc.image().get(0, 0), [0.5, 0.5, 0.0, 1.0]);

        acc.blend(&frame([0.0, 0.0, 3.0, 1.0]));
        let p = acc.image().get(0, 1);
        let expected = [1.0 / 3.0, 1.0 / 3.0, 1.0, 1.0];
        for c in 0..4 {
            assert!((p[c] - expected[c]).abs() < 1e-6);
        }
    }

    #[test]
    fn identical_frames_converge_to_themselves() {
        let mut acc = Accumulator::new(2, 2).unwrap();
        for _ in 0..10 {
            acc.blend(&frame([0.2, 0.4, 0.8, 1.0]));
        }
        let p = acc.image().get(1, 0);
        assert!((p[0] - 0.2).abs() < 1e-6 && (p[1] - 0.4).abs() < 1e-6 && (p[2] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn reset_and_resize_drop_history() {
        let mut acc = Accumulator::new(2, 2).unwrap();
        acc.blend(&frame([1.0; 4]));
        acc.reset();
        assert_eq!(acc.samples(), 0);
        assert_eq!(acc.image().get(0, 0), [0.0; 4]);

        acc.blend(&frame([1.0; 4]));
        acc.resize(3, 1).unwrap();
        assert_eq!(acc.samples(), 0);
        assert_eq!(acc.image().size(), (3, 1));
        assert!(acc.resize(0, 1).is_err());
    }
}
