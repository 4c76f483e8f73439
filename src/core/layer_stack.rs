use super::id_gen::LayerId;
use super::layer::Layer;
use crate::core::error::{CoreError, Result};
use tracing::debug;

/// What a layer-list widget needs to draw one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    pub name: String,
    pub visible: bool,
    pub active: bool,
}

/// Layers in back-to-front order. The active id, when set, always names a member.
#[derive(Debug, Default)]
pub struct LayerStack {
    layers: Vec<Layer>,
    active_layer_id: Option<LayerId>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Layer> {
        self.layers.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    pub fn index_of(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id() == id)
    }

    /// Appends on top and makes the new layer active.
    pub fn push(&mut self, layer: Layer) -> LayerId {
        let id = layer.id();
        debug!(layer = id.get(), name = %layer.name, index = self.layers.len(), "layer appended");
        self.layers.push(layer);
        self.active_layer_id = Some(id);
        id
    }

    /// Removes the layer at `index`. If it was active, the layer below it (or the new
    /// bottom layer) becomes active; an emptied stack has no active layer.
    pub fn remove(&mut self, index: usize) -> Result<Layer> {
        if index >= self.layers.len() {
            return Err(CoreError::LayerNotFound(index));
        }
        let removed = self.layers.remove(index);
        if self.active_layer_id == Some(removed.id()) {
            self.active_layer_id = if self.layers.is_empty() {
                None
            } else {
                let new_idx = index.saturating_sub(1).min(self.layers.len() - 1);
                Some(self.layers[new_idx].id())
            };
        }
        debug!(layer = removed.id().get(), index, remaining = self.layers.len(), "layer removed");
        Ok(removed)
    }

    pub fn active_id(&self) -> Option<LayerId> {
        self.active_layer_id
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_layer_id.and_then(|id| self.index_of(id))
    }

    pub fn active(&self) -> Option<&Layer> {
        let idx = self.active_index()?;
        self.layers.get(idx)
    }

    pub fn active_mut(&mut self) -> Option<&mut Layer> {
        let idx = self.active_index()?;
        self.layers.get_mut(idx)
    }

    pub fn set_active(&mut self, index: usize) -> Result<()> {
        let id = self.layers.get(index).map(Layer::id).ok_or(CoreError::LayerNotFound(index))?;
        debug!(layer = id.get(), index, "active layer changed");
        self.active_layer_id = Some(id);
        Ok(())
    }

    pub fn set_visible(&mut self, index: usize, visible: bool) -> Result<()> {
        let layer = self.layers.get_mut(index).ok_or(CoreError::LayerNotFound(index))?;
        layer.visible = visible;
        Ok(())
    }

    pub fn set_opacity(&mut self, index: usize, opacity: f32) -> Result<()> {
        let layer = self.layers.get_mut(index).ok_or(CoreError::LayerNotFound(index))?;
        layer.set_opacity(opacity);
        Ok(())
    }

    /// Rows for a layer-list widget, bottom layer first.
    pub fn entries(&self) -> Vec<LayerEntry> {
        self.layers
            .iter()
            .map(|l| LayerEntry {
                name: l.name.clone(),
                visible: l.visible,
                active: Some(l.id()) == self.active_layer_id,
            })
            .collect()
    }
}
