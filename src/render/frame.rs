use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{RectArea, RectPrimitive, TextPrimitive};

/// Portion of the surface a frame repaints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameScope {
    /// Whole surface is cleared and redrawn.
    Full,
    /// Only the listed columns are touched; the rest of the surface keeps its
    /// previous pixels.
    Columns(Vec<usize>),
}

/// One immediate-mode draw call. Commands are applied in order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Reset an area to transparent.
    Clear(RectArea),
    FillRect(RectPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Clear(area) => area.validate(),
            Self::FillRect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic batch of draw calls for one repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub scope: FrameScope,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, scope: FrameScope) -> Self {
        Self {
            viewport,
            scope,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn full(viewport: Viewport) -> Self {
        Self::new(viewport, FrameScope::Full)
    }

    #[must_use]
    pub fn with_clear(mut self, area: RectArea) -> Self {
        self.commands.push(DrawCommand::Clear(area));
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.commands.push(DrawCommand::FillRect(rect));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.commands.push(DrawCommand::Text(text));
        self
    }

    /// Appends every command of `other`, merging column scopes.
    pub fn extend(&mut self, other: RenderFrame) {
        self.scope = match (std::mem::replace(&mut self.scope, FrameScope::Full), other.scope) {
            (FrameScope::Columns(mut columns), FrameScope::Columns(more)) => {
                for column in more {
                    if !columns.contains(&column) {
                        columns.push(column);
                    }
                }
                FrameScope::Columns(columns)
            }
            _ => FrameScope::Full,
        };
        self.commands.extend(other.commands);
    }

    pub fn clears(&self) -> impl Iterator<Item = &RectArea> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Clear(area) => Some(area),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Whether any clear command covers the whole viewport.
    #[must_use]
    pub fn clears_whole_surface(&self) -> bool {
        let width = f64::from(self.viewport.width);
        let height = f64::from(self.viewport.height);
        self.clears().any(|area| {
            area.x <= 0.0 && area.y <= 0.0 && area.width >= width && area.height >= height
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
