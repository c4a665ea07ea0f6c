use super::FrameError;

/// The stations a frame passes through on its way to the screen, in order.
///
/// Splitting the loop body into stations keeps the ordering rules in one
/// place, independent of the device which executes them.
pub trait FrameStation {
    /// Block until the previous frame's submission has finished, then make
    /// its synchronization objects reusable.
    fn wait_for_previous_frame(&mut self) -> Result<(), FrameError>;

    /// Acquire the index of the next swapchain image to render into.
    fn acquire_image(&mut self) -> Result<u32, FrameError>;

    /// Record this frame's commands and submit them to the graphics queue.
    fn record_and_submit(&mut self, image_index: u32)
        -> Result<(), FrameError>;

    /// Queue the rendered image for presentation.
    fn present(&mut self, image_index: u32) -> Result<(), FrameError>;
}

/// Drive a single frame through every station in order.
///
/// Each station only runs when the previous one succeeded, so a stale
/// surface reported during acquire never reaches presentation.
pub fn run_frame(
    station: &mut impl FrameStation,
) -> Result<(), FrameError> {
    station.wait_for_previous_frame()?;
    let image_index = station.acquire_image()?;
    station.record_and_submit(image_index)?;
    station.present(image_index)
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Step {
        Wait,
        Acquire,
        Submit(u32),
        Present(u32),
    }

    /// A station which records every step and can fail acquire on demand.
    struct ScriptedStation {
        steps: Vec<Step>,
        image_indices: Vec<u32>,
        stale_on_acquire: bool,
    }

    impl ScriptedStation {
        fn new(image_indices: Vec<u32>) -> Self {
            Self {
                steps: vec![],
                image_indices,
                stale_on_acquire: false,
            }
        }
    }

    impl FrameStation for ScriptedStation {
        fn wait_for_previous_frame(&mut self) -> Result<(), FrameError> {
            self.steps.push(Step::Wait);
            Ok(())
        }

        fn acquire_image(&mut self) -> Result<u32, FrameError> {
            if self.stale_on_acquire {
                return Err(FrameError::SurfaceStale);
            }
            self.steps.push(Step::Acquire);
            Ok(self.image_indices.remove(0))
        }

        fn record_and_submit(
            &mut self,
            image_index: u32,
        ) -> Result<(), FrameError> {
            self.steps.push(Step::Submit(image_index));
            Ok(())
        }

        fn present(&mut self, image_index: u32) -> Result<(), FrameError> {
            self.steps.push(Step::Present(image_index));
            Ok(())
        }
    }

    #[test]
    fn every_frame_visits_the_stations_in_order() {
        let mut station = ScriptedStation::new(vec![0, 1, 0]);
        for _ in 0..3 {
            run_frame(&mut station).unwrap();
        }
        assert_eq!(
            station.steps,
            vec![
                Step::Wait,
                Step::Acquire,
                Step::Submit(0),
                Step::Present(0),
                Step::Wait,
                Step::Acquire,
                Step::Submit(1),
                Step::Present(1),
                Step::Wait,
                Step::Acquire,
                Step::Submit(0),
                Step::Present(0),
            ]
        );
    }

    #[test]
    fn the_submitted_image_is_the_acquired_image() {
        let mut station = ScriptedStation::new(vec![2]);
        run_frame(&mut station).unwrap();
        assert_eq!(
            station.steps,
            vec![Step::Wait, Step::Acquire, Step::Submit(2), Step::Present(2)]
        );
    }

    #[test]
    fn a_stale_surface_skips_submission_and_presentation() {
        let mut station = ScriptedStation::new(vec![0]);
        station.stale_on_acquire = true;

        let result = run_frame(&mut station);

        assert!(matches!(result, Err(FrameError::SurfaceStale)));
        assert_eq!(station.steps, vec![Step::Wait]);
    }
}
