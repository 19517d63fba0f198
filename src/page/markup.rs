// Static markup and styling for the page. Layout only; all behaviour is wired
// up in `page/mod.rs`.

use crate::config::Variant;

pub const HEART_PATH: &str = "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z";
pub const SPARKLE_PATH: &str = "M12 2L14.5 9.5L22 12L14.5 14.5L12 22L9.5 14.5L2 12L9.5 9.5L12 2Z";

pub fn heart_svg(class: &str, fill: &str) -> String {
    format!(
        "<svg viewBox=\"0 0 24 24\" fill=\"{}\" class=\"{}\" xmlns=\"http://www.w3.org/2000/svg\"><path d=\"{}\"/></svg>",
        fill, class, HEART_PATH
    )
}

pub fn sparkle_svg(class: &str) -> String {
    format!(
        "<svg viewBox=\"0 0 24 24\" fill=\"currentColor\" class=\"{}\" xmlns=\"http://www.w3.org/2000/svg\"><path d=\"{}\"/></svg>",
        class, SPARKLE_PATH
    )
}

/// Per-variant wording.
pub struct Wording {
    pub subtitle: &'static str,
    pub yes_label: &'static str,
    pub no_label: &'static str,
    pub accepted_line: &'static str,
    pub footer: &'static str,
    pub background: &'static str,
}

pub fn wording_for(variant: Variant) -> Wording {
    match variant {
        Variant::Classic => Wording {
            subtitle: "The world is vast, but my heart <br class=\"vp-wide\"/> only has room for you...",
            yes_label: "Yes!",
            no_label: "No...",
            accepted_line: "You've made me so happy ❤️",
            footer: "Forever &amp; Always",
            background: "linear-gradient(to bottom right, #ec4899, #c084fc, #fb7185)",
        },
        Variant::Padded => Wording {
            subtitle: "Every heartbeat whispers your name... <br class=\"vp-wide\"/> and every dream starts with you.",
            yes_label: "YES!",
            no_label: "No...",
            accepted_line: "You've made my heart complete ❤️",
            footer: "Forever Starts Today",
            background: "linear-gradient(to bottom right, #fb7185, #f472b6, #e879f9)",
        },
    }
}

pub fn question_html(w: &Wording) -> String {
    format!(
        "<div class=\"vp-hearts-row\">\
           <div class=\"vp-bounce\" style=\"animation-delay:0s\">{h1}</div>\
           <div class=\"vp-bounce\" style=\"animation-delay:0.2s\">{h2}</div>\
           <div class=\"vp-bounce\" style=\"animation-delay:0.4s\">{h1}</div>\
         </div>\
         <h1 class=\"vp-title\">Will you be <br/><span class=\"vp-title-accent\">my Valentine?</span></h1>\
         <p class=\"vp-subtitle\">{subtitle}</p>\
         <div class=\"vp-buttons\">\
           <button class=\"vp-yes\"><span class=\"vp-yes-shine\"></span><span>{yes}</span>{yes_heart}</button>\
         </div>",
        h1 = heart_svg("vp-icon-md vp-rose", "currentColor"),
        h2 = heart_svg("vp-icon-lg vp-white", "currentColor"),
        subtitle = w.subtitle,
        yes = w.yes_label,
        yes_heart = heart_svg("vp-icon-sm", "white"),
    )
}

pub fn answer_html(w: &Wording) -> String {
    format!(
        "<div class=\"vp-pulse vp-center\">{heart}</div>\
         <h1 class=\"vp-title\">I Knew It!</h1>\
         <p class=\"vp-answer-line vp-bounce\">{line}</p>\
         <div class=\"vp-sparkles\">{s_small}{s_big}{s_small}</div>",
        heart = heart_svg("vp-icon-xl vp-rose", "currentColor"),
        line = w.accepted_line,
        s_small = sparkle_svg("vp-icon-md vp-gold vp-spin-slow"),
        s_big = sparkle_svg("vp-icon-lg vp-white vp-pulse"),
    )
}

pub const BASE_CSS: &str = "\
.vp-root{position:fixed;inset:0;overflow:hidden;display:flex;flex-direction:column;align-items:center;justify-content:center;padding:24px;font-family:Georgia,serif;}\
.vp-sky{position:absolute;inset:0;overflow:hidden;pointer-events:none;}\
.vp-falling{position:absolute;top:-10%;opacity:0.2;color:white;}\
.vp-falling svg{width:100%;height:100%;}\
.vp-card{z-index:20;background:rgba(255,255,255,0.2);backdrop-filter:blur(24px);border:1px solid rgba(255,255,255,0.3);padding:40px;border-radius:2.5rem;box-shadow:0 20px 60px rgba(0,0,0,0.25);transition:transform 0.7s;max-width:36rem;width:100%;text-align:center;}\
.vp-accepted .vp-card{transform:scale(1.1);}\
.vp-hearts-row{display:flex;justify-content:center;gap:12px;margin-bottom:32px;}\
.vp-title{font-size:3.5rem;color:white;margin:0 0 24px;line-height:1.2;user-select:none;}\
.vp-title-accent{color:#9f1239;}\
.vp-subtitle{font-size:1.4rem;color:rgba(255,255,255,0.9);font-style:italic;margin-bottom:48px;user-select:none;}\
.vp-buttons{display:flex;flex-wrap:wrap;align-items:center;justify-content:center;gap:32px;margin-top:16px;}\
.vp-yes{position:relative;overflow:hidden;display:flex;align-items:center;gap:12px;padding:20px 48px;background:#e11d48;color:white;font-weight:bold;font-size:1.25rem;border:none;border-radius:9999px;box-shadow:0 10px 30px rgba(225,29,72,0.4);cursor:pointer;transition:transform 0.3s;}\
.vp-yes:hover{transform:scale(1.1);background:#f43f5e;}\
.vp-yes-shine{position:absolute;inset:0;background:rgba(255,255,255,0.2);transform:translateX(-100%);transition:transform 0.5s;}\
.vp-yes:hover .vp-yes-shine{transform:translateX(0);}\
.vp-no{padding:12px 32px;background:rgba(255,255,255,0.2);border:1px solid rgba(255,255,255,0.3);color:white;font-weight:500;border-radius:9999px;box-shadow:0 10px 15px rgba(0,0,0,0.1);transition:transform 0.5s cubic-bezier(0.34,1.56,0.64,1);z-index:50;user-select:none;white-space:nowrap;cursor:default;}\
.vp-answer-line{font-size:1.9rem;color:#881337;margin-top:16px;}\
.vp-sparkles{display:flex;justify-content:center;align-items:center;gap:24px;margin-top:40px;}\
.vp-center{display:flex;justify-content:center;margin-bottom:32px;}\
.vp-burst{position:fixed;inset:0;pointer-events:none;z-index:100;overflow:hidden;}\
.vp-particle{position:absolute;}\
.vp-particle svg{width:100%;height:100%;}\
.vp-footer{position:absolute;bottom:24px;color:rgba(255,255,255,0.4);letter-spacing:0.2em;text-transform:uppercase;pointer-events:none;user-select:none;}\
.vp-audio-prompt{position:absolute;top:40px;color:rgba(255,255,255,0.4);font-size:1.1rem;pointer-events:none;user-select:none;z-index:10;animation:vp-pulse 2s infinite;}\
.vp-icon-sm{width:24px;height:24px;}.vp-icon-md{width:40px;height:40px;}.vp-icon-lg{width:48px;height:48px;}.vp-icon-xl{width:96px;height:96px;}\
.vp-rose{color:#e11d48;}.vp-white{color:white;}.vp-gold{color:#fef08a;}\
.vp-bounce{animation:vp-bounce 1s infinite;}\
.vp-pulse{animation:vp-pulse 2s infinite;}\
.vp-spin-slow{animation:vp-spin 10s linear infinite;}\
@keyframes vp-bounce{0%,100%{transform:translateY(-25%);}50%{transform:none;}}\
@keyframes vp-pulse{50%{opacity:0.5;}}\
@keyframes vp-spin{from{transform:rotate(0deg);}to{transform:rotate(360deg);}}\
@media (max-width:640px){.vp-wide{display:none;}}\
";
