pub struct Icons;

impl Icons {
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const DEL: &str = "🗑️";
    pub const DATABASE: &str = "🗄️";
}
