// SPDX-License-Identifier: MPL-2.0
//! Launch options and their application to a freshly built window.
//!
//! Parsing produces [`LaunchOptions`]; [`resolve`] turns them into a
//! [`LaunchPlan`] following a fixed precedence (discs, then television,
//! then files), and [`apply`] replays the plan against the controller.

use crate::error::{Error, Result};
use crate::media::{self, Deck, DiscKind};
use crate::shell::{DisplayController, DisplayMode, Effect};
use std::ffi::OsString;
use url::Url;

/// Command-line options as given by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub fullscreen: bool,
    pub audio_cd: bool,
    pub video_cd: bool,
    pub dvd: bool,
    /// Optical drive used by the disc options.
    pub device: Option<String>,
    pub channel: Option<String>,
    /// Deprecated alias of `channel`.
    pub tv: Option<String>,
    pub last_channel: bool,
    pub dump_dvb: bool,
    /// Positional files or URLs.
    pub files: Vec<String>,
}

impl LaunchOptions {
    /// Consumes the launch options from `args`. Directory overrides must
    /// already have been taken out.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let mut options = Self {
            fullscreen: args.contains(["-f", "--fullscreen"]),
            audio_cd: args.contains("--audiocd"),
            video_cd: args.contains("--videocd"),
            dvd: args.contains("--dvd"),
            device: args.opt_value_from_str("--device")?,
            channel: args.opt_value_from_str("--channel")?,
            tv: args.opt_value_from_str("--tv")?,
            last_channel: args.contains("--lastchannel"),
            dump_dvb: args.contains("--dumpdvb"),
            files: Vec::new(),
        };

        for argument in args.finish() {
            options.files.push(positional(argument)?);
        }
        Ok(options)
    }
}

fn positional(argument: OsString) -> Result<String> {
    let argument = argument
        .into_string()
        .map_err(|raw| Error::Launch(format!("argument is not valid UTF-8: {raw:?}")))?;
    // A lone "-" is a file name.
    if argument.starts_with('-') && argument.len() > 1 {
        return Err(Error::Launch(format!("unknown option {argument}")));
    }
    Ok(argument)
}

/// What the window should do once it is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchAction {
    PlayDisc {
        kind: DiscKind,
        device: Option<String>,
    },
    PlayChannel(String),
    PlayLastChannel,
    Open(Vec<Url>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchPlan {
    pub full_screen: bool,
    pub dump_dvb: bool,
    pub action: Option<LaunchAction>,
}

/// Resolves options into a plan. Television options are dropped when the
/// television tab is not available.
#[must_use]
pub fn resolve(options: &LaunchOptions, television: bool) -> LaunchPlan {
    let mut plan = LaunchPlan {
        full_screen: options.fullscreen,
        ..LaunchPlan::default()
    };

    let disc = if options.audio_cd {
        Some(DiscKind::AudioCd)
    } else if options.video_cd {
        Some(DiscKind::VideoCd)
    } else if options.dvd {
        Some(DiscKind::Dvd)
    } else {
        None
    };
    if let Some(kind) = disc {
        plan.action = Some(LaunchAction::PlayDisc {
            kind,
            device: options.device.clone(),
        });
        return plan;
    }

    let wants_television = options.dump_dvb
        || options.channel.is_some()
        || options.tv.is_some()
        || options.last_channel;
    if television {
        plan.dump_dvb = options.dump_dvb;
        if let Some(channel) = options.channel.as_ref().or(options.tv.as_ref()) {
            plan.action = Some(LaunchAction::PlayChannel(channel.clone()));
            return plan;
        }
        if options.last_channel {
            plan.action = Some(LaunchAction::PlayLastChannel);
            return plan;
        }
    } else if wants_television {
        log::warn!("television options ignored: built without television support");
    }

    let urls: Vec<Url> = options
        .files
        .iter()
        .filter_map(|file| {
            let url = media::resolve_url(file);
            if url.is_none() {
                log::warn!("skipping invalid launch argument {file:?}");
            }
            url
        })
        .collect();
    if !urls.is_empty() {
        plan.action = Some(LaunchAction::Open(urls));
    }

    plan
}

/// Replays `plan` against the controller and the playback collaborators.
pub fn apply(plan: LaunchPlan, controller: &mut DisplayController, deck: &mut Deck) -> Vec<Effect> {
    let mut effects = Vec::new();

    if plan.full_screen {
        log::info!("launching in full screen");
        effects.extend(controller.set_display_mode(DisplayMode::FullScreen));
    }
    if plan.dump_dvb {
        deck.television_mut().enable_dump();
    }

    let Some(action) = plan.action else {
        return effects;
    };
    log::info!("launch action: {action:?}");

    effects.extend(match action {
        LaunchAction::PlayDisc { kind, device } => deck.play_disc(controller, kind, device),
        LaunchAction::PlayChannel(channel) => deck.play_channel(controller, &channel),
        LaunchAction::PlayLastChannel => deck.play_last_channel(controller),
        LaunchAction::Open(urls) => deck.open_urls(controller, urls),
    });
    effects
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{TabId, TabSet, ToolBarArea};

    fn parse(args: &[&str]) -> Result<LaunchOptions> {
        LaunchOptions::from_args(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    fn controller() -> DisplayController {
        DisplayController::new(TabSet::new(true), ToolBarArea::Bottom)
    }

    #[test]
    fn parses_flags_values_and_files() {
        let options = parse(&["--dvd", "--device", "/dev/sr1", "-f", "a.mkv"]).expect("parse");
        assert!(options.dvd);
        assert!(options.fullscreen);
        assert_eq!(options.device.as_deref(), Some("/dev/sr1"));
        assert_eq!(options.files, ["a.mkv"]);
    }

    #[test]
    fn unknown_option_is_an_error() {
        let result = parse(&["--frobnicate"]);
        assert!(matches!(result, Err(Error::Launch(_))));

        let result = parse(&["-z", "a.mkv"]);
        assert!(matches!(result, Err(Error::Launch(_))));
    }

    #[test]
    fn lone_dash_is_kept_as_file() {
        let options = parse(&["-"]).expect("parse");
        assert_eq!(options.files, ["-"]);
    }

    #[test]
    fn disc_wins_over_channel_and_files() {
        let options = parse(&["--videocd", "--channel", "Arte", "a.mkv"]).expect("parse");
        let plan = resolve(&options, true);
        assert_eq!(
            plan.action,
            Some(LaunchAction::PlayDisc {
                kind: DiscKind::VideoCd,
                device: None
            })
        );
    }

    #[test]
    fn channel_wins_over_files_and_deprecated_tv_alias() {
        let options = parse(&["--tv", "Old", "--channel", "New", "a.mkv"]).expect("parse");
        let plan = resolve(&options, true);
        assert_eq!(plan.action, Some(LaunchAction::PlayChannel("New".into())));

        let options = parse(&["--tv", "Old"]).expect("parse");
        let plan = resolve(&options, true);
        assert_eq!(plan.action, Some(LaunchAction::PlayChannel("Old".into())));
    }

    #[test]
    fn television_options_fall_through_without_television() {
        let options = parse(&["--lastchannel", "--dumpdvb", "https://example.org/a.ogg"])
            .expect("parse");
        let plan = resolve(&options, false);
        assert!(!plan.dump_dvb);
        assert!(matches!(plan.action, Some(LaunchAction::Open(ref urls)) if urls.len() == 1));
    }

    #[test]
    fn fullscreen_combines_with_files() {
        let options = parse(&["--fullscreen", "https://example.org/a.ogg"]).expect("parse");
        let mut controller = controller();
        let mut deck = Deck::new();

        let effects = apply(resolve(&options, true), &mut controller, &mut deck);

        assert_eq!(controller.display_mode(), DisplayMode::FullScreen);
        assert_eq!(effects[0], Effect::ModeChanged(DisplayMode::FullScreen));
        assert_eq!(controller.current_tab(), TabId::Player);
        assert_eq!(deck.recent_urls(), ["https://example.org/a.ogg"]);
    }

    #[test]
    fn several_files_open_the_playlist() {
        let options = parse(&["https://example.org/a.ogg", "https://example.org/b.ogg"])
            .expect("parse");
        let mut controller = controller();
        let mut deck = Deck::new();

        apply(resolve(&options, true), &mut controller, &mut deck);

        assert_eq!(controller.visible_tab(), TabId::Playlist);
        assert_eq!(deck.playlist().entries().len(), 2);
    }

    #[test]
    fn dump_flag_reaches_television() {
        let options = parse(&["--dumpdvb"]).expect("parse");
        let mut controller = controller();
        let mut deck = Deck::new();

        apply(resolve(&options, true), &mut controller, &mut deck);

        assert!(deck.television().is_dump_enabled());
        assert_eq!(controller.visible_tab(), TabId::Start);
    }
}
