//! Sample course-site document used by the demo binary and the tests.

use super::{Document, Element, NodeId};

/// The sample page and the nodes callers usually need.
#[derive(Debug, Clone)]
pub struct CourseSite {
    pub document: Document,
    pub navbar: NodeId,
    pub logo: NodeId,
    pub toggle: NodeId,
    pub nav: NodeId,
    pub links: Vec<NodeId>,
    pub course_card: NodeId,
    pub form: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub message: NodeId,
    pub submit: NodeId,
    pub success: NodeId,
}

const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("courses", "Courses"),
    ("about", "About"),
    ("why", "Why Us"),
    ("contact", "Contact"),
];

/// Builds the marketing page: navbar with toggle and links, content sections, contact form.
pub fn course_site() -> CourseSite {
    let mut doc = Document::new();
    let body = doc.body();

    let navbar = doc.append(body, Element::new("header").with_class("navbar"));
    let logo = doc.append(
        navbar,
        Element::new("a")
            .with_class("logo")
            .with_attribute("href", "#home")
            .with_text("CodeCamp"),
    );
    let toggle = doc.append(
        navbar,
        Element::new("button")
            .with_id("menuToggle")
            .with_class("menu-toggle")
            .with_attribute("type", "button"),
    );
    let nav = doc.append(
        navbar,
        Element::new("ul").with_id("navLinks").with_class("nav-links"),
    );
    let links: Vec<NodeId> = SECTIONS
        .iter()
        .map(|(anchor, label)| {
            let item = doc.append(nav, Element::new("li"));
            doc.append(
                item,
                Element::new("a")
                    .with_attribute("href", format!("#{anchor}"))
                    .with_text(*label),
            )
        })
        .collect();

    let main = doc.append(body, Element::new("main"));
    doc.append(main, Element::new("section").with_id("home"));

    let courses = doc.append(main, Element::new("section").with_id("courses"));
    let course_card = doc.append(courses, Element::new("div").with_class("course-card"));
    doc.append(course_card, Element::new("h3").with_text("Web Development"));
    for title in ["Data Science", "Mobile Apps"] {
        let card = doc.append(courses, Element::new("div").with_class("course-card"));
        doc.append(card, Element::new("h3").with_text(title));
    }

    let about = doc.append(main, Element::new("section").with_id("about"));
    doc.append(about, Element::new("div").with_class("about-container"));

    let why = doc.append(main, Element::new("section").with_id("why"));
    for _ in 0..3 {
        doc.append(why, Element::new("div").with_class("why-card"));
    }

    let contact = doc.append(main, Element::new("section").with_id("contact"));
    doc.append(contact, Element::new("div").with_class("contact-card"));
    let form = doc.append(contact, Element::new("form").with_id("contactForm"));
    let name = doc.append(form, Element::new("input").with_id("name"));
    doc.append(form, Element::new("span").with_id("nameError").with_class("error"));
    let email = doc.append(
        form,
        Element::new("input")
            .with_id("email")
            .with_attribute("type", "email"),
    );
    doc.append(form, Element::new("span").with_id("emailError").with_class("error"));
    let message = doc.append(form, Element::new("textarea").with_id("message"));
    doc.append(
        form,
        Element::new("span").with_id("messageError").with_class("error"),
    );
    let submit = doc.append(
        form,
        Element::new("button")
            .with_id("submitBtn")
            .with_attribute("type", "submit")
            .with_text("Send Message"),
    );
    let success = doc.append(
        contact,
        Element::new("div")
            .with_id("formSuccess")
            .with_text("Thank you! Your message has been sent.")
            .hidden(),
    );

    CourseSite {
        document: doc,
        navbar,
        logo,
        toggle,
        nav,
        links,
        course_card,
        form,
        name,
        email,
        message,
        submit,
        success,
    }
}
