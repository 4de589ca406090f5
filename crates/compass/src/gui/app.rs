use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::notifier::ChannelNotifier;
use crate::gui::theme::{self, ThemeColors};
use crate::resources;
use compass_dial::{
    AccessibilityEvent, AxisConstraint, CairoCanvas, CompassDial, EventType,
    Widget as DialWidget, negotiate_size,
};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type HostDial = CompassDial<ChannelNotifier>;

pub struct AppModel {
    /// `None` while the dial could not be built; nothing is drawn then.
    pub dial: Rc<RefCell<Option<HostDial>>>,
    pub config: Config,
    pub bearing: f64,
    pub visible: bool,
    pub tx: async_channel::Sender<AppEvent>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    SetBearing(f64),
    Accessibility(EventType),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::SetBearing(b) => AppMsg::SetBearing(b),
            AppEvent::Accessibility(e) => AppMsg::Accessibility(e),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn rebuild_dial(&self) {
        let theme = ThemeColors::from_context(&self.drawing_area.style_context());
        let notifier = ChannelNotifier::new(self.tx.clone());
        match resources::build_dial(&self.config, theme, self.bearing, notifier) {
            Ok(dial) => *self.dial.borrow_mut() = Some(dial),
            Err(e) => log::error!("Failed to build dial: {}", e),
        }
    }

    fn publish_description(&self, event_type: EventType) {
        let mut event = AccessibilityEvent::new(event_type);
        let visible = self.drawing_area.is_mapped();
        let handled = self
            .dial
            .borrow()
            .as_ref()
            .is_some_and(|dial| dial.populate_accessibility_event(visible, &mut event));

        if handled && let Some(text) = event.text.first() {
            self.drawing_area
                .update_property(&[gtk::accessible::Property::Description(text)]);
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Config,
        async_channel::Sender<AppEvent>,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Compass"),
            #[watch]
            set_visible: model.visible,

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_content_width: natural_side,
                set_content_height: natural_side,
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "compass-drawing-area",
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, tx, rx) = init;

        theme::load_css();

        let (natural_side, _) =
            negotiate_size(AxisConstraint::unspecified(), AxisConstraint::unspecified());

        let model = AppModel {
            dial: Rc::new(RefCell::new(None)),
            bearing: config.bearing,
            config,
            visible: true,
            tx,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.rebuild_dial();

        let dial_draw = model.dial.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                if let Some(dial) = dial_draw.borrow().as_ref()
                    && let Err(e) = dial.on_draw(&mut CairoCanvas::new(cr), width, height)
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => {
                self.visible = true;
                self.drawing_area.queue_draw();
            }
            AppMsg::Hide => {
                self.visible = false;
            }
            AppMsg::SetBearing(bearing) => {
                self.bearing = bearing;
                if let Some(dial) = self.dial.borrow_mut().as_mut() {
                    dial.set_bearing(bearing);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::Accessibility(event_type) => self.publish_description(event_type),
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    self.config = new_config;
                    self.rebuild_dial();
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
