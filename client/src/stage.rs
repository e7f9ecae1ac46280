//! Display mode and pose. Purely presentational; the only rule tying it to
//! customization is that returning to customize mode drops any pose.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Customize,
    PhotoBooth,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Customize => "Customize",
            ViewMode::PhotoBooth => "Photo booth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    mode: ViewMode,
    pose: String,
    idle_pose: String,
}

impl Stage {
    pub fn new(idle_pose: impl Into<String>) -> Self {
        let idle_pose = idle_pose.into();
        Self {
            mode: ViewMode::Customize,
            pose: idle_pose.clone(),
            idle_pose,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn pose(&self) -> &str {
        &self.pose
    }

    pub fn idle_pose(&self) -> &str {
        &self.idle_pose
    }

    pub fn is_idle(&self) -> bool {
        self.pose == self.idle_pose
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        if mode == ViewMode::Customize {
            self.pose.clone_from(&self.idle_pose);
        }
        if self.mode != mode {
            log::debug!("View mode {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
    }

    pub fn select_pose(&mut self, pose: impl Into<String>) {
        self.pose = pose.into();
        log::debug!("Pose -> {}", self.pose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_in_customize_mode() {
        let stage = Stage::new("Idle");
        assert_eq!(stage.mode(), ViewMode::Customize);
        assert_eq!(stage.pose(), "Idle");
        assert!(stage.is_idle());
    }

    #[test]
    fn photo_booth_keeps_pose() {
        let mut stage = Stage::new("Idle");
        stage.select_pose("Wave");
        stage.set_mode(ViewMode::PhotoBooth);
        assert_eq!(stage.pose(), "Wave");

        stage.select_pose("Dance");
        assert_eq!(stage.mode(), ViewMode::PhotoBooth);
        assert_eq!(stage.pose(), "Dance");
    }

    #[test]
    fn customize_mode_resets_pose() {
        let mut stage = Stage::new("Idle");
        stage.set_mode(ViewMode::PhotoBooth);
        stage.select_pose("Dance");

        stage.set_mode(ViewMode::Customize);
        assert_eq!(stage.pose(), "Idle");

        stage.select_pose("Wave");
        stage.set_mode(ViewMode::Customize);
        assert!(stage.is_idle());
    }
}
