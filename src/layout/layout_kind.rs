crate::define_id_enum! {
    /// Identifies which strategy produced a layout
    LayoutKind {
        Maven => "maven" : "Maven",
        Gradle => "gradle" : "Gradle",
    }
}
