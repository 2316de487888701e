//! Derivation steps shown next to each plot, written in TeX markup.

pub(crate) const CIRCLES: &[&str] = &[
    r"\text{Given family: } x^2 + y^2 = C",
    r"\text{Differentiate w.r.t. } x: \quad 2x + 2y\frac{dy}{dx} = 0",
    r"\text{Solve for } \frac{dy}{dx}: \quad \frac{dy}{dx} = -\frac{x}{y}",
    r"\text{For orthogonal trajectory, replace } \frac{dy}{dx} \text{ with } -\frac{dx}{dy}:",
    r"-\frac{dx}{dy} = -\frac{x}{y} \quad \Rightarrow \quad \frac{dx}{dy} = \frac{x}{y}",
    r"\text{Rearranging: } \frac{dx}{x} = \frac{dy}{y}",
    r"\text{Integrating both sides: } \ln|x| = \ln|y| + \ln|k|",
    r"\text{Orthogonal Trajectory: } \boxed{y = kx}",
];

pub(crate) const PARABOLAS: &[&str] = &[
    r"\text{Given family: } y = Cx^2",
    r"\text{Differentiate w.r.t. } x: \quad \frac{dy}{dx} = 2Cx",
    r"\text{From original equation: } C = \frac{y}{x^2}",
    r"\text{Substitute: } \frac{dy}{dx} = 2 \cdot \frac{y}{x^2} \cdot x = \frac{2y}{x}",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = -\frac{x}{2y}",
    r"\text{Rearranging: } 2y\,dy = -x\,dx",
    r"\text{Integrating: } y^2 = -\frac{x^2}{2} + k",
    r"\text{Orthogonal Trajectory: } \boxed{x^2 + 2y^2 = k}",
];

pub(crate) const HYPERBOLAS: &[&str] = &[
    r"\text{Given family: } xy = C",
    r"\text{Differentiate w.r.t. } x: \quad y + x\frac{dy}{dx} = 0",
    r"\text{Solve for } \frac{dy}{dx}: \quad \frac{dy}{dx} = -\frac{y}{x}",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = \frac{x}{y}",
    r"\text{Rearranging: } y\,dy = x\,dx",
    r"\text{Integrating: } \frac{y^2}{2} = \frac{x^2}{2} + C_1",
    r"\text{Orthogonal Trajectory: } \boxed{x^2 - y^2 = k}",
];

pub(crate) const EXPONENTIALS: &[&str] = &[
    r"\text{Given family: } y = Ce^x",
    r"\text{Differentiate w.r.t. } x: \quad \frac{dy}{dx} = Ce^x",
    r"\text{From original equation: } C = ye^{-x}",
    r"\text{Substitute: } \frac{dy}{dx} = ye^{-x} \cdot e^x = y",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = -\frac{1}{y}",
    r"\text{Rearranging: } y\,dy = -dx",
    r"\text{Integrating: } \frac{y^2}{2} = -x + C_1",
    r"\text{Orthogonal Trajectory: } \boxed{y^2 + 2x = k}",
];

pub(crate) const HORIZONTAL_PARABOLAS: &[&str] = &[
    r"\text{Given family: } y^2 = Cx",
    r"\text{Differentiate w.r.t. } x: \quad 2y\frac{dy}{dx} = C",
    r"\text{From original equation: } C = \frac{y^2}{x}",
    r"\text{Substitute: } \frac{dy}{dx} = \frac{y^2}{2xy} = \frac{y}{2x}",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = -\frac{2x}{y}",
    r"\text{Rearranging: } y\,dy = -2x\,dx",
    r"\text{Integrating: } \frac{y^2}{2} = -x^2 + C_1",
    r"\text{Orthogonal Trajectory: } \boxed{2x^2 + y^2 = k}",
];

pub(crate) const LOGARITHMS: &[&str] = &[
    r"\text{Given family: } y = C\ln(x)",
    r"\text{Differentiate w.r.t. } x: \quad \frac{dy}{dx} = \frac{C}{x}",
    r"\text{From original equation: } C = \frac{y}{\ln(x)}",
    r"\text{Substitute: } \frac{dy}{dx} = \frac{y}{x\ln(x)}",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = -\frac{x\ln(x)}{y}",
    r"\text{Rearranging: } y\,dy = -x\ln(x)\,dx",
    r"\text{Integrating: } \frac{y^2}{2} = -\frac{x^2\ln(x)}{2} + \frac{x^2}{4} + C_1",
    r"\text{Orthogonal Trajectory: } \boxed{y^2 + x^2\ln(x) = k}",
];

pub(crate) const CUBICS: &[&str] = &[
    r"\text{Given family: } y = Cx^3",
    r"\text{Differentiate w.r.t. } x: \quad \frac{dy}{dx} = 3Cx^2",
    r"\text{From original equation: } C = \frac{y}{x^3}",
    r"\text{Substitute: } \frac{dy}{dx} = 3 \cdot \frac{y}{x^3} \cdot x^2 = \frac{3y}{x}",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = -\frac{x}{3y}",
    r"\text{Rearranging: } 3y\,dy = -x\,dx",
    r"\text{Integrating: } \frac{3y^2}{2} = -\frac{x^2}{2} + C_1",
    r"\text{Orthogonal Trajectory: } \boxed{x^2 + 3y^2 = k}",
];

pub(crate) const SINES: &[&str] = &[
    r"\text{Given family: } y = C\sin(x)",
    r"\text{Differentiate w.r.t. } x: \quad \frac{dy}{dx} = C\cos(x)",
    r"\text{From original equation: } C = \frac{y}{\sin(x)}",
    r"\text{Substitute: } \frac{dy}{dx} = y\cot(x)",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = -\frac{\tan(x)}{y}",
    r"\text{Rearranging: } y\,dy = -\tan(x)\,dx",
    r"\text{Integrating: } \frac{y^2}{2} = \ln|\cos(x)| + C_1",
    r"\text{Orthogonal Trajectory: } \boxed{y^2 = 2\ln|\cos(x)| + k}",
];

pub(crate) const LINES: &[&str] = &[
    r"\text{Given family: } y = Cx",
    r"\text{Differentiate w.r.t. } x: \quad \frac{dy}{dx} = C",
    r"\text{From original equation: } C = \frac{y}{x}",
    r"\text{Substitute: } \frac{dy}{dx} = \frac{y}{x}",
    r"\text{For orthogonal trajectory: } \frac{dy}{dx} = -\frac{x}{y}",
    r"\text{Rearranging: } y\,dy = -x\,dx",
    r"\text{Integrating: } \frac{y^2}{2} = -\frac{x^2}{2} + C_1",
    r"\text{Orthogonal Trajectory: } \boxed{x^2 + y^2 = k}",
];
