use gpui::Entity;

use crate::overlay::OverlayEntity;

pub mod settings_entity;
pub mod status_entity;

#[derive(Clone)]
pub struct DataEntities {
    pub settings: Entity<settings_entity::SettingsEntity>,
    pub status: Entity<status_entity::StatusEntity>,
    pub overlay: Entity<OverlayEntity>,
}
