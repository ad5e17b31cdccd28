use crate::commands::{CmdMessage, CmdResult};
use crate::config::{Settings, SettingsPatch};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
    Patch(SettingsPatch),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_settings(Settings::load(dir)?)),
        ConfigAction::ShowKey(key) => {
            let settings = Settings::load(dir)?;
            let mut result = CmdResult::default();
            match settings.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut settings = Settings::load(dir)?;
            if let Err(e) = settings.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            settings.save(dir)?;
            let display_val = settings.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_settings(settings);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
        ConfigAction::Patch(patch) => {
            let mut settings = Settings::load(dir)?;
            settings.apply(patch);
            settings.save(dir)?;
            Ok(CmdResult::default().with_settings(settings))
        }
    }
}
