/// Side effects the host must carry out after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Put the serialized dragged node into the platform drag channel.
    SetDragData(String),
    /// Empty the drag channel once a drop or cancel has consumed it.
    ClearDragData,
}
