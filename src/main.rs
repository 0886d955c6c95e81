use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::ControlFlow;

use trophy::shapes::{ColorMode, Trophy};
use trophy::{context, Context, FrameClock, SetupError};

fn main() {
    env_logger::init();

    let (ctx, event_loop) = unwrap_or_abort(futures::executor::block_on(Context::create_context()));
    let trophy = unwrap_or_abort(Trophy::new(&ctx, ColorMode::Grayscale));

    run(ctx, event_loop, trophy);
}

fn unwrap_or_abort<T>(result: Result<T, SetupError>) -> T {
    result.unwrap_or_else(|err| {
        log::error!("startup failed: {}", err);
        std::process::exit(1);
    })
}

fn run(mut ctx: Context, event_loop: winit::event_loop::EventLoop<()>, trophy: Trophy) -> ! {
    let mut clock = FrameClock::start();

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }
            WindowEvent::Resized(size) => {
                ctx.resize(size);
            }
            WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                ctx.resize(*new_inner_size);
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            ctx.window.request_redraw();
        }
        Event::RedrawRequested(_) => {
            trophy.update(&ctx.queue, clock.elapsed_secs());

            match render_frame(&ctx, &trophy) {
                Ok(()) => {
                    if let Some(average_frametime) = clock.tick() {
                        log::debug!("average frametime: {:.2} ms", average_frametime);
                    }
                }
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    ctx.recreate_surface();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory, exiting");
                    *control_flow = ControlFlow::Exit;
                }
                Err(err) => {
                    log::warn!("dropped frame: {:?}", err);
                }
            }
        }
        _ => {}
    });
}

fn render_frame(ctx: &Context, trophy: &Trophy) -> Result<(), wgpu::SurfaceError> {
    let frame = ctx.surface.get_current_texture()?;
    let view = frame
        .texture
        .create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
    {
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: None,
            color_attachments: &[wgpu::RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: true,
                },
            }],
            depth_stencil_attachment: None,
        });

        let (x, y, width, height) = context::viewport_rect(ctx.size);
        rpass.set_viewport(x, y, width, height, 0.0, 1.0);
        trophy.draw(&mut rpass);
    }

    ctx.queue.submit(Some(encoder.finish()));
    frame.present();
    Ok(())
}
