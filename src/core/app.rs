use cosmic::iced::{Length, Size, Task};
use cosmic::iced_widget::column;
use cosmic::{app, widget};

use crate::catalog::{Catalog, Place};
use crate::fl;
use crate::session::messages::Msg;
use crate::session::state::{RemovalConfirm, SessionState};
use crate::store::SelectionStore;
use crate::{geo, location};

pub(crate) fn run() -> cosmic::iced::Result {
    let settings = cosmic::app::Settings::default().size(Size::new(560.0, 720.0));
    cosmic::app::run::<App>(settings, ())
}

pub struct App {
    pub core: app::Core,
    /// Static set of all selectable places.
    pub catalog: Catalog,
    /// Picked places and the removal confirmation flow.
    pub session: SessionState,
    /// Catalog ordered by distance; empty until geolocation resolves.
    pub available: Vec<Place>,
}

impl cosmic::Application for App {
    type Executor = cosmic::executor::Default;

    type Flags = ();

    type Message = Msg;

    const APP_ID: &'static str = "io.github.waypick.Waypick";

    fn core(&self) -> &app::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut app::Core {
        &mut self.core
    }

    fn init(
        core: app::Core,
        _flags: Self::Flags,
    ) -> (Self, cosmic::iced::Task<cosmic::Action<Self::Message>>) {
        let catalog = Catalog::load();
        let session = SessionState::restore(&catalog, SelectionStore::open_default());

        let app = Self {
            core,
            catalog,
            session,
            available: Vec::new(),
        };

        // One-shot position request. If the process exits before it resolves,
        // the late result is simply dropped with the runtime.
        let locate = Task::perform(location::current_position(Self::APP_ID), |position| {
            cosmic::Action::App(Msg::LocationResolved(position))
        });

        (app, locate)
    }

    fn update(
        &mut self,
        message: Self::Message,
    ) -> cosmic::iced::Task<cosmic::Action<Self::Message>> {
        match message {
            Msg::PlaceSelected(id) => {
                self.session.select(&self.catalog, &id);
            }
            Msg::RemovalRequested(id) => {
                self.session.request_removal(id);
            }
            Msg::RemovalCancelled => {
                self.session.cancel_removal();
            }
            Msg::RemovalConfirmed => {
                self.session.confirm_removal();
            }
            Msg::LocationResolved(Some(position)) => {
                self.available = geo::sort_places_by_distance(self.catalog.places(), position);
            }
            Msg::LocationResolved(None) => {
                // No recovery path; the available list keeps its default state.
            }
        }
        Task::none()
    }

    fn view(&self) -> cosmic::Element<'_, Self::Message> {
        let header = column![
            widget::text::title1(fl!("app-title")),
            widget::text::body(fl!("app-tagline")),
        ]
        .spacing(4);

        let picked = crate::widget::places::places_list(
            fl!("picked-title"),
            fl!("picked-fallback"),
            self.session.picked(),
            Msg::RemovalRequested,
        );

        let available = crate::widget::places::places_list(
            fl!("available-title"),
            fl!("available-fallback"),
            &self.available,
            Msg::PlaceSelected,
        );

        widget::scrollable(
            column![header, picked, available]
                .spacing(24)
                .padding(24)
                .width(Length::Fill),
        )
        .into()
    }

    fn dialog(&self) -> Option<cosmic::Element<'_, Self::Message>> {
        match self.session.confirm() {
            RemovalConfirm::Idle => None,
            RemovalConfirm::Pending(_) => Some(
                widget::dialog()
                    .title(fl!("remove-title"))
                    .body(fl!("remove-body"))
                    .primary_action(
                        widget::button::destructive(fl!("remove-confirm"))
                            .on_press(Msg::RemovalConfirmed),
                    )
                    .secondary_action(
                        widget::button::standard(fl!("remove-cancel"))
                            .on_press(Msg::RemovalCancelled),
                    )
                    .into(),
            ),
        }
    }
}
