use super::{FpsText, WaterText};
use bevy::prelude::*;

/// Marker to find the container entity so we can show/hide the HUD
#[derive(Component)]
pub struct HudRoot;

fn hud_line(commands: &mut Commands, label: &str) -> Entity {
    commands
        .spawn((
            Text::new(label),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ))
        .id()
}

pub fn setup_debug_hud(mut commands: Commands) {
    // create our UI root node
    // this is the wrapper/container for the text
    let root = commands
        .spawn((
            HudRoot,
            // hidden until toggled
            Visibility::Hidden,
            BackgroundColor(Color::BLACK.with_alpha(0.5)),
            // always on top of the water
            GlobalZIndex(i32::MAX),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(1.),
                top: Val::Percent(1.),
                bottom: Val::Auto,
                right: Val::Auto,
                padding: UiRect::all(Val::Px(4.0)),
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
        ))
        .id();

    let text_fps = hud_line(&mut commands, "FPS: ");
    commands.entity(text_fps).with_child((
        FpsText,
        TextSpan::new("N/A"),
        TextFont::from_font_size(16.0),
        TextColor(Color::WHITE),
    ));

    let text_water = hud_line(&mut commands, "Water: ");
    commands.entity(text_water).with_child((
        WaterText,
        TextSpan::new("N/A"),
        TextFont::from_font_size(16.0),
        TextColor(Color::srgb(0.6, 0.9, 1.0)),
    ));

    commands.entity(root).add_children(&[text_fps, text_water]);
}
