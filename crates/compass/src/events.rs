use compass_dial::EventType;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Show,
    Hide,
    SetBearing(f64),
    Accessibility(EventType),
    ConfigReload,
}
