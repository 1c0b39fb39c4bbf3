use glam::DMat4;

/// The model matrix as a GPU-ready uniform (f32, column-major, 64 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl From<DMat4> for ModelUniform {
    fn from(model: DMat4) -> Self {
        Self {
            model: model.as_mat4().to_cols_array_2d(),
        }
    }
}

impl ModelUniform {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
