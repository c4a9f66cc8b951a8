use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Top-left position that centers a window of `window_size` on a monitor.
///
/// Windows larger than the monitor are pinned to the monitor origin.
pub fn centered_position(
    monitor_position: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    window_size: PhysicalSize<u32>,
) -> PhysicalPosition<i32> {
    let free_x = monitor_size.width.saturating_sub(window_size.width) / 2;
    let free_y = monitor_size.height.saturating_sub(window_size.height) / 2;

    PhysicalPosition::new(
        monitor_position.x.saturating_add(free_x as i32),
        monitor_position.y.saturating_add(free_y as i32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_on_primary_origin() {
        let pos = centered_position(
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(1920, 1080),
            PhysicalSize::new(800, 800),
        );
        assert_eq!(pos, PhysicalPosition::new(560, 140));
    }

    #[test]
    fn offsets_by_monitor_position() {
        let pos = centered_position(
            PhysicalPosition::new(-2560, 0),
            PhysicalSize::new(2560, 1440),
            PhysicalSize::new(800, 800),
        );
        assert_eq!(pos, PhysicalPosition::new(-1680, 320));
    }

    #[test]
    fn oversized_window_sticks_to_origin() {
        let pos = centered_position(
            PhysicalPosition::new(10, 20),
            PhysicalSize::new(640, 480),
            PhysicalSize::new(800, 800),
        );
        assert_eq!(pos, PhysicalPosition::new(10, 20));
    }
}
