use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        println!("{}", content);
        Ok(())
    }

    /// Editor to use: `--editor`, then $EDITOR / $VISUAL, then the platform default.
    pub fn resolve_editor(requested: Option<&str>) -> (String, String) {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor = requested
            .map(str::to_string)
            .unwrap_or_else(|| default_editor.clone());
        (editor, default_editor)
    }

    /// Open `path` in the requested editor, falling back to the default one.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let (editor, fallback) = Self::resolve_editor(editor);

        match Command::new(&editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using '{}'", editor));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor, fallback
            )),
        }

        match Command::new(&fallback).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited using fallback '{}'", fallback));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit {} with '{}'",
                path.display(),
                fallback
            ))),
        }
    }
}
