use yew::prelude::*;

use crate::page::smooth_scroll::ScrollLink;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header id="home" class="hero">
            <div class="hero-content fade-in">
                <h1>{"Music that moves with you"}</h1>
                <p class="hero-subtitle">
                    {"Fresh releases from independent artists, hand-picked every week."}
                </p>
                <div class="hero-cta-group">
                    <ScrollLink href="#music" class={classes!("hero-cta")}>
                        {"Start Listening"}
                    </ScrollLink>
                    <ScrollLink href="#about" class={classes!("hero-link")}>
                        {"Learn more"}
                    </ScrollLink>
                </div>
            </div>
        </header>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title fade-in">{"About Pulse"}</h2>
                <div class="about-grid">
                    <div class="about-card zoom-in">
                        <i class="fas fa-headphones"></i>
                        <h3>{"Curated"}</h3>
                        <p>{"Every track is picked by people, not an algorithm."}</p>
                    </div>
                    <div class="about-card zoom-in">
                        <i class="fas fa-heart"></i>
                        <h3>{"Artist first"}</h3>
                        <p>{"Most of what you pay goes straight to the artist."}</p>
                    </div>
                    <div class="about-card zoom-in">
                        <i class="fas fa-bolt"></i>
                        <h3>{"Weekly drops"}</h3>
                        <p>{"New picks land every Friday."}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <footer id="contact" class="footer">
            <div class="container fade-in">
                <h2 class="section-title">{"Get in touch"}</h2>
                <p>{"Questions, demos or just want to say hi?"}</p>
                <a href="mailto:hello@pulse.example" class="footer-email">{"hello@pulse.example"}</a>
                <div class="footer-bottom">
                    <ScrollLink href="#home">{"Back to top"}</ScrollLink>
                </div>
            </div>
        </footer>
    }
}
