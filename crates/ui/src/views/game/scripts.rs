pub(super) fn audio_script(playing: bool) -> String {
    format!(
        r#"(function() {{
                    const audio = document.getElementById("game-audio");
                    if (!audio) return;
                    const playing = {playing};
                    if (playing) {{
                        const attempt = audio.play();
                        if (attempt && attempt.catch) attempt.catch(() => {{}});
                    }} else {{
                        audio.pause();
                    }}
                }})();"#,
        playing = playing,
    )
}
